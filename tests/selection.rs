//! End-to-end checks of the fiducial selection over hand-built events
//!
//! Each test materializes one event's columns the way the host framework
//! would, runs the full selection chain, and checks masks, category codes
//! and observables together.

use ttgamma_fiducial::{
    category::FROM_WB_DECAY,
    fiducial::parton::last_copy_tops,
    observables::{dilepton_delta_phi, photon_closest_top_dr, UNDEFINED},
    photon_origin_category, Configuration, GenParticles,
};

/// Columnar event under construction
#[derive(Default)]
struct EventBuilder {
    pdg_id: Vec<i32>,
    status: Vec<i32>,
    status_flags: Vec<i32>,
    pt: Vec<f64>,
    eta: Vec<f64>,
    phi: Vec<f64>,
    mother_idx: Vec<i32>,
}
//
impl EventBuilder {
    /// Start from the incoming beam proton
    fn new() -> Self {
        let mut event = Self::default();
        event.add(2212, 4, 0, (0.0, 0.0, 0.0), -1);
        event
    }

    fn add(
        &mut self,
        pdg_id: i32,
        status: i32,
        status_flags: i32,
        (pt, eta, phi): (f64, f64, f64),
        mother_idx: i32,
    ) -> i32 {
        self.pdg_id.push(pdg_id);
        self.status.push(status);
        self.status_flags.push(status_flags);
        self.pt.push(pt);
        self.eta.push(eta);
        self.phi.push(phi);
        self.mother_idx.push(mother_idx);
        (self.pdg_id.len() - 1) as i32
    }

    fn view(&self) -> GenParticles<'_> {
        GenParticles::new(
            &self.pdg_id,
            &self.status,
            &self.status_flags,
            &self.pt,
            &self.eta,
            &self.phi,
            &self.mother_idx,
        )
    }
}

#[test]
fn prompt_isolated_photon_is_fiducial() {
    let config = Configuration::default();
    let mut event = EventBuilder::new();
    let photon = event.add(22, 1, 0, (25.0, 0.1, 0.0), 0);
    let mask = config.parton.fiducial_photons(&event.view());
    assert!(mask[photon as usize]);
}

#[test]
fn photon_with_a_b_hadron_in_its_history_is_not() {
    let config = Configuration::default();
    let mut event = EventBuilder::new();
    let b_hadron = event.add(511, 2, 0, (40.0, 1.5, 2.0), 0);
    let photon = event.add(22, 1, 0, (25.0, 0.1, 0.0), b_hadron);
    let mask = config.parton.fiducial_photons(&event.view());
    assert!(!mask[photon as usize]);
}

#[test]
fn dilepton_azimuthal_separation_with_a_sentinel_fallback() {
    let config = Configuration::default();
    let mut event = EventBuilder::new();
    event.add(11, 1, 0, (40.0, 0.5, 0.0), 0);
    event.add(-13, 1, 0, (30.0, -0.5, 3.0), 0);
    let parts = event.view();

    let mask = config.parton.fiducial_leptons(&parts);
    let lepton_phi: Vec<f64> = mask
        .iter()
        .enumerate()
        .filter(|&(_, &fiducial)| fiducial)
        .map(|(i, _)| parts.phi[i])
        .collect();
    assert_eq!(lepton_phi.len(), 2);
    let dphi = dilepton_delta_phi(&lepton_phi);
    assert!((dphi - 3.0).abs() < 1e-12);

    // With a single fiducial lepton the observable degrades to the sentinel
    assert_eq!(dilepton_delta_phi(&lepton_phi[..1]), UNDEFINED);
}

#[test]
fn photon_from_the_w_of_a_top_chain_lands_in_category_two() {
    let config = Configuration::default();
    let mut event = EventBuilder::new();
    let top = event.add(6, 22, 0, (150.0, 0.5, 1.0), 0);
    let w = event.add(24, 22, 0, (80.0, 0.6, 1.2), top);
    let photon = event.add(22, 1, 0, (25.0, -1.0, -2.0), w);

    let parts = event.view();
    let mask = config.parton.fiducial_photons(&parts);
    assert!(mask[photon as usize]);
    assert_eq!(photon_origin_category(&parts, &mask), FROM_WB_DECAY);
    assert_eq!(FROM_WB_DECAY, 2);
}

#[test]
fn events_without_fiducial_photons_land_in_category_zero() {
    let config = Configuration::default();
    let mut event = EventBuilder::new();
    event.add(11, 1, 0, (40.0, 0.5, 0.0), 0);
    let parts = event.view();
    let mask = config.parton.fiducial_photons(&parts);
    assert!(mask.iter().all(|&fiducial| !fiducial));
    assert_eq!(photon_origin_category(&parts, &mask), 0);
}

#[test]
fn photon_to_top_distance_runs_off_the_fiducial_collections() {
    let config = Configuration::default();
    let mut event = EventBuilder::new();
    let last_copy = 1 << 13;
    let gluon = event.add(21, 21, 0, (200.0, 0.0, 0.0), 0);
    let top = event.add(6, 62, last_copy, (150.0, 1.0, 1.0), gluon);
    event.add(-6, 62, last_copy, (140.0, -2.0, -2.0), gluon);
    let w = event.add(24, 22, 0, (80.0, 0.6, 1.2), top);
    event.add(22, 1, 0, (25.0, 0.5, 0.5), w);

    let parts = event.view();
    let photon_mask = config.parton.fiducial_photons(&parts);
    let top_mask = last_copy_tops(&parts);

    let gather = |mask: &[bool], column: &[f64]| -> Vec<f64> {
        mask.iter()
            .zip(column)
            .filter(|&(&keep, _)| keep)
            .map(|(_, &value)| value)
            .collect()
    };
    let dr = photon_closest_top_dr(
        &gather(&photon_mask, parts.eta),
        &gather(&photon_mask, parts.phi),
        &gather(&top_mask, parts.eta),
        &gather(&top_mask, parts.phi),
    );
    // The nearer top sits half a unit away in both eta and phi
    assert!((dr - (2.0f64 * 0.25).sqrt()).abs() < 1e-12);

    // An event with no selected top degrades to the sentinel
    let no_tops = photon_closest_top_dr(
        &gather(&photon_mask, parts.eta),
        &gather(&photon_mask, parts.phi),
        &[],
        &[],
    );
    assert_eq!(no_tops, UNDEFINED);
}
