//! Fiducial selection predicates for generator-level physics objects
//!
//! The measurement's signal definition exists at two generator output
//! stages, and each gets its own submodule:
//!
//! * [`parton`] works on the raw generated particle record, where the full
//!   decay ancestry is available, and combines kinematic cuts with isolation
//!   and ancestry vetoes.
//! * [`particle`] works on post-hadronization physics objects (dressed
//!   leptons, isolated photons, generator jets), which retain no parent
//!   index, so its predicates are kinematics and isolation only.
//!
//! Every predicate returns a boolean mask aligned with its input collection
//! and retains no state across events.

pub mod particle;
pub mod parton;
