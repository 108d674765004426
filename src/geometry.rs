//! Angular-distance primitives shared by the isolation and observable code
//!
//! Detector coordinates are (η, φ) pairs where φ is an azimuthal angle that
//! wraps around at ±π. Every separation computed here therefore has to go
//! through [`delta_phi`] rather than a plain subtraction.

use crate::numeric::{floats::consts::PI, Float};

use prefix_num_ops::real::*;

/// Signed azimuthal difference `phi1 - phi2`, wrapped into (−π, π]
pub fn delta_phi(phi1: Float, phi2: Float) -> Float {
    let mut dphi = phi1 - phi2;
    while dphi > PI {
        dphi -= 2. * PI;
    }
    while dphi <= -PI {
        dphi += 2. * PI;
    }
    dphi
}

/// Squared angular separation ΔR² = Δη² + Δφ²
///
/// Kept squared so that cone-radius comparisons can square the threshold
/// instead of taking a square root per particle pair.
pub fn delta_r2(eta1: Float, phi1: Float, eta2: Float, phi2: Float) -> Float {
    let deta = eta1 - eta2;
    let dphi = delta_phi(phi1, phi2);
    deta * deta + dphi * dphi
}

/// Angular separation ΔR, for the callers that report an actual distance
pub fn delta_r(eta1: Float, phi1: Float, eta2: Float, phi2: Float) -> Float {
    sqrt(delta_r2(eta1, phi1, eta2, phi2))
}
