//! Fiducial selection on post-hadronization physics objects
//!
//! Particle-level collections (dressed leptons, isolated photons, generator
//! jets) are built by the generator from stable final-state particles and
//! retain no parent index, so nothing here touches the ancestry machinery:
//! every predicate is a kinematic cut plus, where the signal definition asks
//! for it, an isolation scan against another particle-level collection.

use crate::{
    isolation::clean_by_dr,
    numeric::Float,
};

use prefix_num_ops::real::*;

/// Generator hadron-flavour code of jets containing a b hadron
const B_FLAVOUR: i32 = 5;

/// Cut thresholds of the particle-level fiducial selection
pub struct ParticleCuts {
    /// Minimum isolated-photon transverse momentum (GeV)
    pub photon_pt_min: Float,

    /// Maximum isolated-photon |η|
    pub photon_abs_eta_max: Float,

    /// Photon veto radius around dressed leptons
    pub photon_lepton_dr: Float,

    /// Minimum dressed-lepton transverse momentum (GeV)
    pub lepton_pt_min: Float,

    /// Maximum dressed-lepton |η|
    pub lepton_abs_eta_max: Float,

    /// Minimum jet transverse momentum (GeV)
    pub jet_pt_min: Float,

    /// Maximum jet |η|
    pub jet_abs_eta_max: Float,

    /// Jet veto radius around dressed leptons and isolated photons
    pub jet_iso_dr: Float,
}
//
impl Default for ParticleCuts {
    /// Nominal cut values of the measurement
    fn default() -> Self {
        Self {
            photon_pt_min: 20.0,
            photon_abs_eta_max: 2.5,
            photon_lepton_dr: 0.1,
            lepton_pt_min: 15.0,
            lepton_abs_eta_max: 2.5,
            jet_pt_min: 30.0,
            jet_abs_eta_max: 2.4,
            jet_iso_dr: 0.4,
        }
    }
}
//
impl ParticleCuts {
    /// Flag the fiducial isolated photons of one event
    pub fn fiducial_photons(
        &self,
        photon_pt: &[Float],
        photon_eta: &[Float],
        photon_phi: &[Float],
        lepton_eta: &[Float],
        lepton_phi: &[Float],
    ) -> Vec<bool> {
        let away_from_leptons = clean_by_dr(
            photon_eta,
            photon_phi,
            lepton_eta,
            lepton_phi,
            self.photon_lepton_dr,
        );
        photon_pt
            .iter()
            .zip(photon_eta)
            .zip(&away_from_leptons)
            .map(|((&pt, &eta), &isolated)| {
                pt > self.photon_pt_min && abs(eta) < self.photon_abs_eta_max && isolated
            })
            .collect()
    }

    /// Flag the fiducial dressed leptons of one event
    pub fn fiducial_leptons(&self, lepton_pt: &[Float], lepton_eta: &[Float]) -> Vec<bool> {
        lepton_pt
            .iter()
            .zip(lepton_eta)
            .map(|(&pt, &eta)| pt > self.lepton_pt_min && abs(eta) < self.lepton_abs_eta_max)
            .collect()
    }

    /// Flag the fiducial generator jets of one event
    ///
    /// Jets are clustered from everything stable, so a dressed lepton or an
    /// isolated photon shows up as a jet of its own; both are vetoed by an
    /// isolation scan.
    ///
    #[allow(clippy::too_many_arguments)]
    pub fn fiducial_jets(
        &self,
        jet_pt: &[Float],
        jet_eta: &[Float],
        jet_phi: &[Float],
        lepton_eta: &[Float],
        lepton_phi: &[Float],
        photon_eta: &[Float],
        photon_phi: &[Float],
    ) -> Vec<bool> {
        let away_from_leptons =
            clean_by_dr(jet_eta, jet_phi, lepton_eta, lepton_phi, self.jet_iso_dr);
        let away_from_photons =
            clean_by_dr(jet_eta, jet_phi, photon_eta, photon_phi, self.jet_iso_dr);
        jet_pt
            .iter()
            .zip(jet_eta)
            .zip(away_from_leptons.iter().zip(&away_from_photons))
            .map(|((&pt, &eta), (&iso_lep, &iso_pho))| {
                pt > self.jet_pt_min && abs(eta) < self.jet_abs_eta_max && iso_lep && iso_pho
            })
            .collect()
    }
}

/// Flag the b jets among a set of fiducial jets
///
/// Applies to the hadron-flavour column of jets that already passed
/// [`ParticleCuts::fiducial_jets`].
///
pub fn fiducial_b_jets(hadron_flavour: &[i32]) -> Vec<bool> {
    hadron_flavour
        .iter()
        .map(|&flavour| flavour == B_FLAVOUR)
        .collect()
}
