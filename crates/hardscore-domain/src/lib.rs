//! Pure check evaluation (no IO).
//!
//! Input: a check registry built elsewhere and an [`Evidence`] source.
//! Output: a [`ScoreReport`](hardscore_types::ScoreReport).

#![forbid(unsafe_code)]

pub mod baseline;
pub mod evidence;
pub mod matchers;
pub mod model;
pub mod policy;
pub mod registry;

mod engine;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

#[cfg(test)]
mod proptest;

pub use baseline::{BASELINE_MAX_SCORE, baseline};
pub use engine::evaluate;
pub use evidence::Evidence;
pub use model::{Check, CheckRegistry, Probe};
pub use registry::{CheckRegistryBuilder, RegistryError};
