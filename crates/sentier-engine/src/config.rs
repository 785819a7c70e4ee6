use std::path::Path;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Configuration for a game session.
///
/// Every field has a default, so a JSON file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Report NPC moves as output lines after each turn.
    pub trace_npcs: bool,
    /// Stamina cost of a move with nothing carried.
    pub move_base_cost: f64,
    /// Extra stamina per kilogram carried.
    pub weight_cost_factor: f64,
    /// Stamina restored by `rest`.
    pub rest_amount: f64,
    /// Probability that an NPC tries to move on a turn.
    pub npc_move_chance: f64,
    /// Name of the item that picks locks.
    pub lockpick_item: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            trace_npcs: false,
            move_base_cost: 10.0,
            weight_cost_factor: 2.0,
            rest_amount: 30.0,
            npc_move_chance: 0.5,
            lockpick_item: "kit de crochetage".to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> EngineResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> EngineResult<()> {
        if !(0.0..=1.0).contains(&self.npc_move_chance) {
            return Err(EngineError::Config(format!(
                "npc_move_chance must be between 0 and 1, got {}",
                self.npc_move_chance
            )));
        }
        if self.move_base_cost < 0.0 || self.weight_cost_factor < 0.0 || self.rest_amount < 0.0 {
            return Err(EngineError::Config(
                "costs and rest amount must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Set the RNG seed for reproducible games.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Turn NPC move reporting on or off.
    pub fn with_trace_npcs(mut self, trace: bool) -> Self {
        self.trace_npcs = trace;
        self
    }

    /// Set the base stamina cost of a move.
    pub fn with_move_base_cost(mut self, cost: f64) -> Self {
        self.move_base_cost = cost;
        self
    }

    /// Set the stamina cost per kilogram carried.
    pub fn with_weight_cost_factor(mut self, factor: f64) -> Self {
        self.weight_cost_factor = factor;
        self
    }

    /// Set the stamina restored by resting.
    pub fn with_rest_amount(mut self, amount: f64) -> Self {
        self.rest_amount = amount;
        self
    }

    /// Set the per-turn NPC move probability.
    pub fn with_npc_move_chance(mut self, chance: f64) -> Self {
        self.npc_move_chance = chance;
        self
    }

    /// Set the name of the lock-picking item.
    pub fn with_lockpick_item(mut self, name: impl Into<String>) -> Self {
        self.lockpick_item = name.into();
        self
    }
}
