//! Test tree mirroring `src/`, in the module-per-component style rather
//! than inline `#[cfg(test)] mod tests` blocks.

mod bury;
mod cipher;
mod compat;
mod hash;
mod random;
