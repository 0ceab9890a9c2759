//! CLI infrastructure for the oxo tic-tac-toe solver
//!
//! This module provides the command-line interface for playing against the
//! engine, solving positions and running matches between agents.

pub mod commands;
pub mod config;
pub mod output;
