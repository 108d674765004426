//! Production-origin categorization of the leading fiducial photon
//!
//! Every selected event carries one scalar code describing why its leading
//! generator photon exists: radiated in a decay chain (off a lepton, off the
//! W/b products of a top, or along a top propagator), emitted as initial
//! state radiation, or attached to off-shell top production. The code is a
//! bitmask over the flags below, evaluated for the highest-pt first-copy
//! fiducial photon of the event.

use crate::{
    ancestry::{ancestor_chain, first_copy, nth_ancestor_property},
    event::{pdg, GenParticles},
};

use log::{debug, trace};

/// Bit set when the leading photon was radiated off a charged lepton
pub const FROM_LEPTON_DECAY: i32 = 1 << 0;

/// Bit set when it came off a W or b in a top decay chain
pub const FROM_WB_DECAY: i32 = 1 << 1;

/// Bit set when it was radiated along a top's own propagator line
pub const FROM_TOP_DECAY: i32 = 1 << 2;

/// Bit set for initial-state-radiation photons
pub const FROM_ISR: i32 = 1 << 3;

/// Bit set for photons attached to off-shell top production
pub const FROM_OFFSHELL_TOP: i32 = 1 << 4;

/// Origin flags of one first-copy photon
struct PhotonOrigin {
    from_lepton_decay: bool,
    from_wb_decay: bool,
    from_top_decay: bool,
    from_isr: bool,
    from_offshell_top: bool,
}
//
impl PhotonOrigin {
    /// Work out the origin of the first-copy photon at `idx`
    fn of(parts: &GenParticles<'_>, idx: usize) -> Self {
        let mother_pdg = nth_ancestor_property(idx as i32, parts.mother_idx, parts.pdg_id, 0);
        let grandmother_pdg = nth_ancestor_property(idx as i32, parts.mother_idx, parts.pdg_id, 1);

        let mother_is_lepton = pdg::is_charged_lepton(mother_pdg);
        let mother_is_w_or_b = matches!(mother_pdg.abs(), pdg::W | pdg::BOTTOM);
        let mother_is_top = mother_pdg.abs() == pdg::TOP;
        let mother_is_gluon = mother_pdg.abs() == pdg::GLUON;

        // A W or b only counts as part of a top decay chain when a top
        // actually sits somewhere in the photon's history
        let has_top_ancestor = ancestor_chain(parts.mother_idx[idx], parts.mother_idx, parts.pdg_id)
            .any(|id| id.abs() == pdg::TOP);

        let from_lepton_decay = mother_is_lepton;
        let from_wb_decay = has_top_ancestor && mother_is_w_or_b;
        // A top mother repeating its own pdgId one generation up means the
        // photon was emitted along the top's propagator line
        let from_top_decay = mother_is_top && grandmother_pdg == mother_pdg;
        let from_decay = from_lepton_decay || from_wb_decay || from_top_decay;

        Self {
            from_lepton_decay,
            from_wb_decay,
            from_top_decay,
            from_isr: !mother_is_top && !from_decay && !mother_is_gluon,
            from_offshell_top: (mother_is_top && !from_decay) || mother_is_gluon,
        }
    }

    /// Pack the flags into the category bitmask
    fn code(&self) -> i32 {
        (self.from_lepton_decay as i32) * FROM_LEPTON_DECAY
            | (self.from_wb_decay as i32) * FROM_WB_DECAY
            | (self.from_top_decay as i32) * FROM_TOP_DECAY
            | (self.from_isr as i32) * FROM_ISR
            | (self.from_offshell_top as i32) * FROM_OFFSHELL_TOP
    }
}

/// Category code of the leading fiducial photon of one event
///
/// `fiducial_photons` is the parton-level fiducial photon mask of the same
/// event. Each fiducial photon is first resolved to the first copy of
/// itself, the origin flags are computed there, and the flags of the
/// highest-pt first copy (ties broken by the first occurrence in index
/// order) are packed into the returned bitmask. An event without fiducial
/// photons maps to category 0.
///
pub fn photon_origin_category(parts: &GenParticles<'_>, fiducial_photons: &[bool]) -> i32 {
    debug!("Categorizing the event's generator-level photons");
    let first_copies = first_copy(parts.pdg_id, parts.mother_idx, fiducial_photons);
    let photons: Vec<usize> = (0..parts.len()).filter(|&i| first_copies[i]).collect();

    let leading = photons
        .iter()
        .copied()
        .reduce(|best, idx| if parts.pt[idx] > parts.pt[best] { idx } else { best });
    let Some(leading) = leading else {
        debug!("No fiducial photon, category 0");
        return 0;
    };

    let category = PhotonOrigin::of(parts, leading).code();
    trace!("Leading photon index: {}", leading);
    debug!("Final category: {}", category);
    category
}
