//! Ports (trait boundaries) between the game engine and its drivers.
//!
//! The match runner and CLI only talk to agents and observers through these
//! traits, so new players or reporting sinks plug in without touching them.

pub mod agent;
pub mod observer;

pub use agent::Agent;
pub use observer::Observer;
