//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `antpath.toml` file. Command-line flags override file values.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impl)
//! 2. `antpath.toml` file (overrides defaults)
//! 3. Command-line flags (override both)
//!
//! ## Example `antpath.toml`
//!
//! ```toml
//! [field]
//! width = 100
//! height = 100
//!
//! [pheromone]
//! decay_step = 1
//!
//! [agents]
//! max_agents = 250
//! starting_agents = 1
//! seed = 42
//!
//! [run]
//! cycles = 10000
//! snapshot_interval = 500
//! ```

use crate::field::DEFAULT_DECAY_STEP;
use crate::walker::{WalkerConfig, SUCCESS_DEPOSIT};
use serde::{Deserialize, Serialize};

/// Grid reconstruction parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
    pub width: usize,
    pub height: usize,
    /// Characters that separate tokens in a scan line.
    pub delimiters: String,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            delimiters: ",".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PheromoneConfig {
    /// Amount every eligible cell loses per cycle.
    pub decay_step: u32,
    /// Trail laid by an agent that found the destination over 1000 cells.
    pub success_deposit: u32,
}

impl Default for PheromoneConfig {
    fn default() -> Self {
        Self {
            decay_step: DEFAULT_DECAY_STEP,
            success_deposit: SUCCESS_DEPOSIT,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AgentConfig {
    pub max_agents: usize,
    pub starting_agents: usize,
    /// A new agent joins every `spawn_interval` cycles until `max_agents`.
    pub spawn_interval: u64,
    pub memory_length: usize,
    pub revisit_bias: f64,
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_agents: 250,
            starting_agents: 1,
            spawn_interval: 10,
            memory_length: 4,
            revisit_bias: 0.25,
            seed: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    pub cycles: u64,
    /// Take a progress snapshot every N cycles; `None` disables snapshots.
    pub snapshot_interval: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            cycles: 10_000,
            snapshot_interval: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    pub field: FieldConfig,
    pub pheromone: PheromoneConfig,
    pub agents: AgentConfig,
    pub run: RunConfig,
}

impl SimConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.field.width > 0, "Field width must be positive");
        anyhow::ensure!(self.field.width <= 10_000, "Field width too large (max 10000)");
        anyhow::ensure!(self.field.height > 0, "Field height must be positive");
        anyhow::ensure!(
            self.field.height <= 10_000,
            "Field height too large (max 10000)"
        );
        anyhow::ensure!(
            !self.field.delimiters.is_empty(),
            "At least one delimiter is required"
        );

        anyhow::ensure!(
            self.pheromone.decay_step > 0,
            "Decay step must be positive"
        );

        anyhow::ensure!(self.agents.max_agents > 0, "Max agents must be positive");
        anyhow::ensure!(
            self.agents.starting_agents <= self.agents.max_agents,
            "Starting agents ({}) exceed max agents ({})",
            self.agents.starting_agents,
            self.agents.max_agents
        );
        anyhow::ensure!(
            self.agents.spawn_interval > 0,
            "Spawn interval must be positive"
        );
        anyhow::ensure!(
            self.agents.revisit_bias >= 0.0 && self.agents.revisit_bias <= 1.0,
            "Revisit bias must be in [0.0, 1.0]"
        );

        if let Some(interval) = self.run.snapshot_interval {
            anyhow::ensure!(interval > 0, "Snapshot interval must be positive");
        }
        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn walker(&self) -> WalkerConfig {
        WalkerConfig {
            memory_length: self.agents.memory_length,
            revisit_bias: self.agents.revisit_bias,
            success_deposit: self.pheromone.success_deposit,
        }
    }
}
