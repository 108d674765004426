//! Fiducial selection on the raw generated particle record
//!
//! Parton-level objects expose the full decay ancestry, so the photon
//! predicate can combine acceptance cuts with isolation scans against other
//! record entries and a veto on hadronic ancestry. The cut thresholds are
//! gathered in [`PartonCuts`] so that a configuration file can override the
//! measurement's nominal values.

use crate::{
    ancestry::{ancestor_chain, nth_ancestor_property},
    event::{pdg, GenParticles},
    isolation::clean_by_dr,
    numeric::Float,
};

use log::{debug, trace};
use prefix_num_ops::real::*;

/// Cut thresholds of the parton-level fiducial selection
pub struct PartonCuts {
    /// Minimum photon transverse momentum (GeV)
    pub photon_pt_min: Float,

    /// Maximum photon |η|
    pub photon_abs_eta_max: Float,

    /// Isolation cone radius around photon candidates
    pub iso_cone_dr: Float,

    /// Minimum pt of particles that can spoil a photon's isolation (GeV)
    pub iso_pt_min: Float,

    /// Minimum lepton transverse momentum (GeV)
    pub lepton_pt_min: Float,

    /// Maximum lepton |η|
    pub lepton_abs_eta_max: Float,
}
//
impl Default for PartonCuts {
    /// Nominal cut values of the measurement
    fn default() -> Self {
        Self {
            photon_pt_min: 20.0,
            photon_abs_eta_max: 2.5,
            iso_cone_dr: 0.4,
            iso_pt_min: 5.0,
            lepton_pt_min: 5.0,
            lepton_abs_eta_max: 2.5,
        }
    }
}
//
impl PartonCuts {
    /// Flag the fiducial photons of one event
    ///
    /// A photon candidate must clear four gates in sequence, each able to
    /// veto it:
    ///
    /// 1. be a stable photon inside the kinematic acceptance,
    /// 2. carry no stable charged lepton inside its isolation cone,
    /// 3. carry no other stable particle inside the cone, not counting
    ///    neutrinos and photons,
    /// 4. descend from no hadron, with the beam proton exempted.
    ///
    /// Gates 2-4 are only evaluated for candidates that already cleared
    /// gate 1; isolation and ancestry walks over rejected candidates would
    /// be wasted work.
    ///
    pub fn fiducial_photons(&self, parts: &GenParticles<'_>) -> Vec<bool> {
        let mut mask = vec![false; parts.len()];

        debug!("Identifying fiducial parton-level photons");
        let candidates: Vec<usize> = (0..parts.len())
            .filter(|&i| {
                parts.pdg_id[i].abs() == pdg::PHOTON
                    && parts.is_stable(i)
                    && parts.pt[i] > self.photon_pt_min
                    && abs(parts.eta[i]) < self.photon_abs_eta_max
            })
            .collect();
        debug!("{} photon candidates within acceptance", candidates.len());
        if candidates.is_empty() {
            return mask;
        }

        // Reference collections for the two isolation gates. Photons are
        // absent from both, so a candidate never spoils its own isolation.
        let spoiler = |i: &usize| parts.is_stable(*i) && parts.pt[*i] > self.iso_pt_min;
        let (lep_eta, lep_phi): (Vec<Float>, Vec<Float>) = (0..parts.len())
            .filter(spoiler)
            .filter(|&i| pdg::is_charged_lepton(parts.pdg_id[i]))
            .map(|i| (parts.eta[i], parts.phi[i]))
            .unzip();
        let (other_eta, other_phi): (Vec<Float>, Vec<Float>) = (0..parts.len())
            .filter(spoiler)
            .filter(|&i| {
                !pdg::is_neutrino(parts.pdg_id[i]) && parts.pdg_id[i].abs() != pdg::PHOTON
            })
            .map(|i| (parts.eta[i], parts.phi[i]))
            .unzip();

        let cand_eta: Vec<Float> = candidates.iter().map(|&i| parts.eta[i]).collect();
        let cand_phi: Vec<Float> = candidates.iter().map(|&i| parts.phi[i]).collect();
        let iso_lep = clean_by_dr(&cand_eta, &cand_phi, &lep_eta, &lep_phi, self.iso_cone_dr);
        let iso_other = clean_by_dr(
            &cand_eta,
            &cand_phi,
            &other_eta,
            &other_phi,
            self.iso_cone_dr,
        );

        for ((&i, &iso_l), &iso_o) in candidates.iter().zip(&iso_lep).zip(&iso_other) {
            if !(iso_l && iso_o) {
                trace!("Photon {} fails isolation", i);
                continue;
            }
            let from_hadron = ancestor_chain(parts.mother_idx[i], parts.mother_idx, parts.pdg_id)
                .any(|id| id.abs() > pdg::HADRON_THRESHOLD && id.abs() != pdg::PROTON);
            if from_hadron {
                trace!("Photon {} has a hadron ancestor, vetoed", i);
                continue;
            }
            mask[i] = true;
        }
        debug!(
            "{} fiducial photons",
            mask.iter().filter(|&&kept| kept).count()
        );
        mask
    }

    /// Flag the fiducial charged leptons (electrons and muons) of one event
    pub fn fiducial_leptons(&self, parts: &GenParticles<'_>) -> Vec<bool> {
        (0..parts.len())
            .map(|i| {
                parts.pt[i] > self.lepton_pt_min
                    && abs(parts.eta[i]) < self.lepton_abs_eta_max
                    && parts.is_stable(i)
                    && matches!(parts.pdg_id[i].abs(), pdg::ELECTRON | pdg::MUON)
            })
            .collect()
    }
}

/// Flag the decaying top quarks of one event
///
/// The last-copy flag selects the final top of each shower chain, right
/// before its decay, which avoids double counting the intermediate copies.
/// Requiring a real parent drops the incoming beam entries.
///
pub fn last_copy_tops(parts: &GenParticles<'_>) -> Vec<bool> {
    (0..parts.len())
        .map(|i| {
            parts.is_last_copy(i) && parts.pdg_id[i].abs() == pdg::TOP && parts.mother_idx[i] > 0
        })
        .collect()
}

/// Flag the b quarks emitted by top decays, at their first copy
pub fn extra_b_quarks(parts: &GenParticles<'_>) -> Vec<bool> {
    (0..parts.len())
        .map(|i| {
            parts.is_first_copy(i)
                && parts.pdg_id[i].abs() == pdg::BOTTOM
                && nth_ancestor_property(i as i32, parts.mother_idx, parts.pdg_id, 0).abs()
                    == pdg::TOP
        })
        .collect()
}
