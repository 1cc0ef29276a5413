//! #  Smoking Risk - A Rust library for scoring smoking-related lung cancer risk.
//!
//! The score is a simple additive model over three inputs. It is not
//! clinically calibrated and should only be used as a relative indicator.
//!
//! ## Overview
//!
//! The score is the sum of three components:
//!
//! - **Base risk**: `0.5` per pack-year
//! - **Early initiation penalty**: `2.0` per year started before 18, or `1.0`
//!   per year started before 25
//! - **Age factor**: `0.1` per year of age
//!
//! ## Quick Start
//!
//! ```rust
//! use smoking_risk::{calculate_risk_score, InvalidRiskInput};
//!
//! let score = calculate_risk_score(45, 20.5, 16)?;
//! assert!((score - 18.75).abs() < 1e-9);
//!
//! assert_eq!(
//!     calculate_risk_score(0, 20.5, 16),
//!     Err(InvalidRiskInput::NonPositiveAge(0))
//! );
//! # Ok::<(), InvalidRiskInput>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for `RiskBreakdown` and
//!   `InitiationBand` (`RiskInputs` and `InvalidRiskInput` are serialize-only)
//! - `tracing`: Emit `tracing` events for rejected inputs and computed scores
//! - `std`: Enable standard library support (enabled by default). Disable for `no_std` environments.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Risk score inputs, validation and formula.
pub mod risk;

pub use risk::{
    ADOLESCENT_CUTOFF, ADOLESCENT_PENALTY_PER_YEAR, AGE_WEIGHT, InitiationBand, InvalidRiskInput,
    PACK_YEAR_WEIGHT, RiskBreakdown, RiskInputs, YOUNG_ADULT_CUTOFF, YOUNG_ADULT_PENALTY_PER_YEAR,
    calculate_risk_score,
};
