//! Columnar view of one event's generator-level particle record
//!
//! The host framework hands us one fixed-length array per particle attribute,
//! all addressed by a common index space. This module bundles those columns
//! into a borrowed struct so that the selection code can pass one handle
//! around instead of seven slices, and defines the domain constants (PDG
//! species codes, generator status flags, parent sentinel) that the
//! predicates are written against.

use crate::numeric::Float;

/// PDG Monte Carlo particle numbering codes, as far as this crate cares
///
/// Signs encode particle vs antiparticle and are irrelevant for every check
/// performed here; compare against `pdg_id.abs()`.
pub mod pdg {
    /// Bottom quark
    pub const BOTTOM: i32 = 5;
    /// Top quark
    pub const TOP: i32 = 6;
    /// Electron
    pub const ELECTRON: i32 = 11;
    /// Electron neutrino
    pub const NU_E: i32 = 12;
    /// Muon
    pub const MUON: i32 = 13;
    /// Muon neutrino
    pub const NU_MU: i32 = 14;
    /// Tau lepton
    pub const TAU: i32 = 15;
    /// Tau neutrino
    pub const NU_TAU: i32 = 16;
    /// Gluon
    pub const GLUON: i32 = 21;
    /// Photon
    pub const PHOTON: i32 = 22;
    /// W boson
    pub const W: i32 = 24;
    /// Proton
    pub const PROTON: i32 = 2212;

    /// Lowest |pdgId| of the hadron code range used by the ancestry veto
    ///
    /// Everything above this (except the proton) counts as a hadron when
    /// deciding whether a photon is a hadron decay product.
    pub const HADRON_THRESHOLD: i32 = 37;

    /// Truth of "is a charged lepton" for a raw pdgId
    pub fn is_charged_lepton(pdg_id: i32) -> bool {
        matches!(pdg_id.abs(), ELECTRON | MUON | TAU)
    }

    /// Truth of "is a neutrino" for a raw pdgId
    pub fn is_neutrino(pdg_id: i32) -> bool {
        matches!(pdg_id.abs(), NU_E | NU_MU | NU_TAU)
    }
}

/// Generator status value of stable final-state particles
pub const STATUS_STABLE: i32 = 1;

/// statusFlags bit marking the first copy of a particle in its decay chain
pub const FIRST_COPY_BIT: i32 = 12;

/// statusFlags bit marking the last copy of a particle in its decay chain
pub const LAST_COPY_BIT: i32 = 13;

/// Parallel per-particle columns of one event, borrowed from the caller
///
/// All slices share one length and one index space: entry `i` of every
/// column describes the same generator particle. A negative `mother_idx`
/// entry means the particle is a root of the decay forest.
///
pub struct GenParticles<'evt> {
    /// PDG species code (signed)
    pub pdg_id: &'evt [i32],

    /// Generator status (1 = stable final state)
    pub status: &'evt [i32],

    /// Generator bookkeeping flag bits
    pub status_flags: &'evt [i32],

    /// Transverse momentum (GeV)
    pub pt: &'evt [Float],

    /// Pseudorapidity
    pub eta: &'evt [Float],

    /// Azimuthal angle, wrapping at ±π
    pub phi: &'evt [Float],

    /// Index of the parent particle, or a negative sentinel for roots
    pub mother_idx: &'evt [i32],
}
//
impl<'evt> GenParticles<'evt> {
    /// Bundle the per-particle columns of one event
    ///
    /// All columns must have the same length; mismatched columns are a bug
    /// in the caller's event decoding, not a recoverable condition.
    ///
    pub fn new(
        pdg_id: &'evt [i32],
        status: &'evt [i32],
        status_flags: &'evt [i32],
        pt: &'evt [Float],
        eta: &'evt [Float],
        phi: &'evt [Float],
        mother_idx: &'evt [i32],
    ) -> Self {
        let len = pdg_id.len();
        assert_eq!(status.len(), len);
        assert_eq!(status_flags.len(), len);
        assert_eq!(pt.len(), len);
        assert_eq!(eta.len(), len);
        assert_eq!(phi.len(), len);
        assert_eq!(mother_idx.len(), len);
        Self {
            pdg_id,
            status,
            status_flags,
            pt,
            eta,
            phi,
            mother_idx,
        }
    }

    /// Number of particles in the event
    pub fn len(&self) -> usize {
        self.pdg_id.len()
    }

    /// Truth of "this event contains no particles"
    pub fn is_empty(&self) -> bool {
        self.pdg_id.is_empty()
    }

    /// Truth of "particle i is the first copy in its own decay chain"
    pub fn is_first_copy(&self, i: usize) -> bool {
        self.status_flags[i] & (1 << FIRST_COPY_BIT) != 0
    }

    /// Truth of "particle i is the last copy in its own decay chain"
    pub fn is_last_copy(&self, i: usize) -> bool {
        self.status_flags[i] & (1 << LAST_COPY_BIT) != 0
    }

    /// Truth of "particle i is a stable final-state particle"
    pub fn is_stable(&self, i: usize) -> bool {
        self.status[i] == STATUS_STABLE
    }
}
