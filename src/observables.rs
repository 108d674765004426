//! Scalar per-event kinematic summaries derived from fiducial collections
//!
//! These observables are computed after the fiducial masks have been applied
//! and skimmed by the caller, so their inputs are already-selected, pt-ordered
//! collections. Events too sparse for an observable to make sense map to the
//! fixed sentinel value instead of an error.

use crate::{
    geometry::{delta_phi, delta_r2},
    numeric::Float,
};

use prefix_num_ops::real::*;

/// Sentinel reported when an event has too few objects for an observable
pub const UNDEFINED: Float = -99.0;

/// Azimuthal separation of the two leading fiducial leptons
///
/// Expects the φ column of the pt-ordered fiducial lepton collection and
/// folds the separation into [0, π]. Events with fewer than two fiducial
/// leptons report [`UNDEFINED`].
///
pub fn dilepton_delta_phi(lepton_phi: &[Float]) -> Float {
    match lepton_phi {
        [first, second, ..] => abs(delta_phi(*first, *second)),
        _ => UNDEFINED,
    }
}

/// ΔR between the leading fiducial photon and the closest fiducial top
///
/// Reports [`UNDEFINED`] when the event has no fiducial photon or no
/// fiducial top.
///
pub fn photon_closest_top_dr(
    photon_eta: &[Float],
    photon_phi: &[Float],
    top_eta: &[Float],
    top_phi: &[Float],
) -> Float {
    let (Some(&pho_eta), Some(&pho_phi)) = (photon_eta.first(), photon_phi.first()) else {
        return UNDEFINED;
    };
    top_eta
        .iter()
        .zip(top_phi)
        .map(|(&eta, &phi)| delta_r2(pho_eta, pho_phi, eta, phi))
        .fold(None, |closest: Option<Float>, dr2| match closest {
            Some(best) if best <= dr2 => Some(best),
            _ => Some(dr2),
        })
        .map_or(UNDEFINED, sqrt)
}
