//! Sources of nondeterminism supplied by callers.
//!
//! The engine never owns a generator; every function that rolls dice or draws
//! treasure borrows a [`RandRange`] for the duration of the call.
mod rng;

pub use rng::{FixedRange, RandRange, ScriptedRange};
