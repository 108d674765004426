//! Angular isolation matching between two particle collections
//!
//! Both operations compare a "probe" collection against a "reference"
//! collection under a ΔR cone radius, with an all-pairs scan. Events carry
//! tens of particles at most, so the plain double loop beats any spatial
//! index. Comparisons stay in ΔR² space; the threshold is squared once
//! instead of square-rooting every pair.

use crate::{
    geometry::delta_r2,
    numeric::Float,
};

/// Flag every probe element without a reference element inside the cone
///
/// The output is aligned with the probe collection: `true` means isolated,
/// `false` means some reference element lies within `min_dr`. An empty
/// reference collection leaves every probe element isolated.
///
pub fn clean_by_dr(
    probe_eta: &[Float],
    probe_phi: &[Float],
    ref_eta: &[Float],
    ref_phi: &[Float],
    min_dr: Float,
) -> Vec<bool> {
    let min_dr2 = min_dr * min_dr;
    probe_eta
        .iter()
        .zip(probe_phi)
        .map(|(&eta, &phi)| {
            ref_eta
                .iter()
                .zip(ref_phi)
                .all(|(&r_eta, &r_phi)| delta_r2(eta, phi, r_eta, r_phi) >= min_dr2)
        })
        .collect()
}

/// Zero out only the probe element closest to any reference element
///
/// Unlike [`clean_by_dr`], this runs a single running minimum across the
/// full probe × reference scan and clears exactly one probe slot, the global
/// best match, leaving every other probe at 1 even when it also sits inside
/// the cone of some reference element. The asymmetry is intentional: the one
/// call site pairing the best lepton with a photon wants exactly one veto
/// per event. Probes farther than `min_dr` from every reference are never
/// matched, so the mask can also come back all ones.
///
pub fn clean_by_dr_best_match(
    probe_eta: &[Float],
    probe_phi: &[Float],
    ref_eta: &[Float],
    ref_phi: &[Float],
    min_dr: Float,
) -> Vec<i32> {
    let mut mask = vec![1; probe_eta.len()];
    let mut best_dr2 = min_dr * min_dr;
    let mut best_probe = None;

    for (r_eta, r_phi) in ref_eta.iter().zip(ref_phi) {
        for (j, (eta, phi)) in probe_eta.iter().zip(probe_phi).enumerate() {
            let dr2 = delta_r2(*r_eta, *r_phi, *eta, *phi);
            if dr2 < best_dr2 {
                best_dr2 = dr2;
                best_probe = Some(j);
            }
        }
    }

    if let Some(j) = best_probe {
        mask[j] = 0;
    }
    mask
}
