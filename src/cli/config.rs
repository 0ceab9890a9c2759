//! Shared configuration types for CLI commands

use serde::{Deserialize, Serialize};

use crate::pipeline::MatchConfig;

/// Common configuration shared across commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Whether to show progress bars
    pub progress: bool,

    /// Verbose output
    pub verbose: bool,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            seed: None,
            progress: true,
            verbose: false,
        }
    }
}

impl CommonConfig {
    /// Default `env_logger` filter; `RUST_LOG` still overrides it.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Apply the shared seed on top of a match configuration.
    ///
    /// A seed given here wins over one loaded from a config file.
    pub fn apply_to(&self, config: MatchConfig) -> MatchConfig {
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}
