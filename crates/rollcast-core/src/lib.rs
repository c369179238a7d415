//! Core contracts and helpers for Rollcast.
//!
//! This crate defines the configuration model and its validation, the
//! engine-name catalog, the fixed-point rendering shared by output and
//! filters, the filter chain, and the descriptive statistics used by the
//! generation engine and the CLI.

pub mod config;
pub mod engines;
pub mod error;
pub mod filter;
pub mod format;
pub mod stats;

pub use config::{RollOptions, RoundMode, RunConfig, StatSet};
pub use engines::{ENGINE_CATALOG, EngineKind};
pub use error::{ConfigError, Result};
pub use filter::{FilterSet, Rejection};
pub use format::{MAX_PRECISION, format_fixed, is_numeric_fragment};
