//! TypeMaster - typing progression and certificates
//!
//! Turns a user's typing statistics into a rank, a level progress bar and a
//! set of unlocked milestones, and issues printable certificates for the
//! milestones a user has earned.
//!
//! ## Layout
//!
//! - [`catalog`]: the level, rank and milestone tables
//! - [`progression`]: level progress and rank derivation
//! - [`milestones`]: milestone definitions and unlock evaluation
//! - [`certificate`]: certificate composition and the PDF export pipeline
//! - [`session`]: where user snapshots and test history come from
//! - [`config`]: TOML configuration

pub mod catalog;
pub mod certificate;
pub mod config;
pub mod domain;
pub mod milestones;
pub mod progression;
pub mod session;

pub use domain::*;
