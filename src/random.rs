//! Randomness used by the codec: an OS-backed CSPRNG for IV generation (and
//! for filling the unused tail of the bit stream, spec §4.4) and a from-scratch
//! MT19937 Mersenne Twister for the password-seeded stride schedule (spec
//! §4.2).
//!
//! These two generators must never share state (spec §5, Design Notes "Global
//! mutable PRNG"): the stride generator is a deterministic function of the
//! password, while the CSPRNG draws fresh entropy from the OS every time.

mod fortuna;
mod mt19937;

pub use {fortuna::Fortuna, mt19937::Mt19937};

/// A cryptographically secure pseudorandom number generator.
pub trait Csprng {
    fn fill(&mut self, buf: &mut [u8]);
}

/// A source of entropy, typically the operating system's CSPRNG.
pub trait Entropy {
    fn get(&mut self, buf: &mut [u8]);
}

/// [`Entropy`] backed by the operating system's random number generator via
/// the `getrandom` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl Entropy for OsEntropy {
    fn get(&mut self, buf: &mut [u8]) {
        getrandom::getrandom(buf).expect("OS entropy source is unavailable");
    }
}
