//! Match pipeline
//!
//! This module provides:
//! - Built-in agents (minimax, random and defensive baselines)
//! - A match runner that plays agents against each other
//! - Observers for progress reporting and game transcripts

pub mod agents;
pub mod observers;
pub mod runner;

pub use agents::{DefensiveAgent, MinimaxAgent, RandomAgent};
pub use observers::{ProgressObserver, TranscriptObserver};
pub use runner::{MatchConfig, MatchResult, MatchRunner};

pub use crate::ports::{Agent, Observer};
