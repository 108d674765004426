//! Fiducial classification of generator-level ttbar+photon events
//!
//!
//! # Introduction (for the physicist)
//!
//! This crate reimplements the generator-level signal definition of a
//! ttbar+photon cross-section measurement. For every simulated event it
//! decides which generated particles fall inside the fiducial phase space
//! (photons, charged leptons, tops and b quarks at parton level; dressed
//! leptons, isolated photons and jets at particle level), and it traces the
//! decay history of the leading fiducial photon to categorize how it was
//! produced: radiated in a decay chain, emitted as initial state radiation,
//! or attached to off-shell top production.
//!
//!
//! # Introduction (for the numerical guy)
//!
//! Per event, the input is a handful of parallel columns (one entry per
//! generated particle): species code, generator status and flags, (pt, η,
//! φ) kinematics, and a parent index encoding the decay forest. Outputs are
//! boolean masks aligned with those columns, plus a few per-event scalars.
//! Three primitives do all the work: a bounded walk along the parent-index
//! forest, an all-pairs angular isolation scan, and kinematic predicates
//! composed from both.
//!
//!
//! # Introduction (for the computer guy)
//!
//! Everything is a pure function over borrowed slices. No component retains
//! state across events, no I/O happens inside the selection (the optional
//! configuration loader is the one fallible, file-touching entry point), and
//! events can be processed in parallel at the caller's discretion with zero
//! coordination. Malformed parent arrays degrade to shorter ancestry walks
//! rather than panics: a single corrupt particle must not take down the
//! processing of an event sample.

#![warn(missing_docs)]

pub mod ancestry;
pub mod category;
pub mod config;
pub mod event;
pub mod fiducial;
pub mod geometry;
pub mod isolation;
pub mod numeric;
pub mod observables;

pub use crate::{
    category::photon_origin_category,
    config::Configuration,
    event::GenParticles,
    fiducial::{particle::ParticleCuts, parton::PartonCuts},
};

/// We'll use anyhow's type-erased result type throughout the crate
pub type Result<T> = anyhow::Result<T>;
