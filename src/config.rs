//! Search configuration parameters.

use anyhow::{Result, bail};

use crate::constants::{DEFAULT_DEPTH, DEFAULT_PLAYOUTS};

/// Parameters shared by the strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Lookahead in plies for minimax and alpha-beta.
    pub depth: u32,

    /// Playouts per candidate (flat Monte Carlo) or per decision (tree
    /// Monte Carlo).
    pub playouts: usize,

    /// Seed for the random strategies. `None` seeds from the system.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            playouts: DEFAULT_PLAYOUTS,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Create a fast, reproducible config for testing.
    pub fn for_testing() -> Self {
        Self {
            depth: 2,
            playouts: 4,
            seed: Some(1),
        }
    }

    /// Reject parameters that would make a strategy return without searching.
    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 {
            bail!("search depth must be at least 1");
        }
        if self.playouts == 0 {
            bail!("playout count must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SearchConfig::default().validate().is_ok());
        assert!(SearchConfig::for_testing().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero() {
        let config = SearchConfig {
            depth: 0,
            ..SearchConfig::default()
        };
        assert!(config.validate().is_err());

        let config = SearchConfig {
            playouts: 0,
            ..SearchConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("playout"));
    }
}
