//! CompatibilityChecker: a pure check for whether two or three passwords
//! can share a single carrier without their header pixels colliding (spec
//! §4.9).

use crate::{error::BuryError, pdp::Pdp, random::Mt19937};

/// Derive PDP for `password` and walk its stride schedule until the
/// cumulative pixel index exceeds `max_offset`, returning the set of pixel
/// indices touched (not including the password's own offset).
fn strides_past(pdp: &Pdp, max_offset: usize) -> Vec<usize> {
    let mut rng = Mt19937::new(pdp.stride_seed);
    let bound = (pdp.max_stride - 1) as u32;
    let mut acc = pdp.offset as usize;
    let mut pixels = Vec::new();
    while acc <= max_offset {
        let stride = rng.next_bounded(bound) + 1;
        acc += stride as usize;
        pixels.push(acc);
    }
    pixels
}

/// Two passwords are compatible iff neither's offset pixel appears in the
/// other's stride-pixel set. `are_compatible(p, p)` is always `false`: a
/// password is never compatible with itself.
pub fn are_compatible(passwords: &[&[u8]]) -> Result<bool, BuryError> {
    let pdps: Vec<Pdp> = passwords
        .iter()
        .map(|password| Pdp::derive(password))
        .collect::<Result<_, _>>()?;

    for i in 0..pdps.len() {
        for j in 0..pdps.len() {
            if i == j {
                continue;
            }
            if pdps[i].offset == pdps[j].offset {
                return Ok(false);
            }
        }
    }

    let max_offset = pdps.iter().map(|pdp| pdp.offset as usize).max().unwrap_or(0);
    let stride_sets: Vec<Vec<usize>> = pdps.iter().map(|pdp| strides_past(pdp, max_offset)).collect();

    for i in 0..pdps.len() {
        for j in 0..pdps.len() {
            if i == j {
                continue;
            }
            if stride_sets[j].contains(&pdps[i].offset) {
                return Ok(false);
            }
        }
    }

    Ok(true)
}
