//! Core types: configuration, contestants, RNG, errors.
//!
//! This module contains the building blocks that know nothing about any
//! particular ruleset. Games configure these via `RulesConfig` and
//! `GameSettings` rather than modifying the core.

pub mod config;
pub mod contestant;
pub mod error;
pub mod rng;

pub use config::{FxIndexMap, GameSettings, RulesConfig, WinEntry};
pub use contestant::{Contestants, Side};
pub use error::{ConfigError, GameError};
pub use rng::{GameRng, GameRngState};
