use std::collections::BTreeSet;

use crate::item::{Inventory, round2};
use crate::quest::QuestLedger;
use crate::room::RoomId;

/// A resource meter clamped to `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Stamina(f64);

impl Stamina {
    /// Upper bound of the meter.
    pub const MAX: f64 = 100.0;

    /// Create a meter at `value`, clamped into range.
    pub fn new(value: f64) -> Self {
        Self(round2(value.clamp(0.0, Self::MAX)))
    }

    /// Current value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Subtract `amount`, never going below zero.
    pub fn spend(&mut self, amount: f64) {
        *self = Self::new(self.0 - amount);
    }

    /// Add `amount`, never going above the maximum.
    pub fn restore(&mut self, amount: f64) {
        *self = Self::new(self.0 + amount);
    }
}

impl Default for Stamina {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

/// Highest skill level a player can reach.
pub const MAX_SKILL: u8 = 10;

/// The player's state.
#[derive(Debug, Clone)]
pub struct Player {
    /// Display name.
    pub name: String,
    /// The room the player is in.
    pub location: RoomId,
    /// Carried items.
    pub inventory: Inventory,
    /// Stamina meter, spent by movement.
    pub stamina: Stamina,
    /// Maximum carried weight in kilograms.
    pub max_weight: f64,
    /// Rooms previously visited, most recent last.
    pub history: Vec<RoomId>,
    /// Successful moves so far.
    pub moves: u32,
    /// The player's quests.
    pub quests: QuestLedger,
    /// Rewards earned, without duplicates.
    pub rewards: BTreeSet<String>,
    /// Coins carried.
    pub coins: u32,
    /// Lock-picking and theft skill.
    pub skill: u8,
}

impl Player {
    /// Create a player standing in `location` with full stamina.
    pub fn new(name: impl Into<String>, location: RoomId) -> Self {
        Self {
            name: name.into(),
            location,
            inventory: Inventory::new(),
            stamina: Stamina::default(),
            max_weight: 5.0,
            history: Vec::new(),
            moves: 0,
            quests: QuestLedger::new(),
            rewards: BTreeSet::new(),
            coins: 0,
            skill: 1,
        }
    }

    /// Set the weight ceiling.
    pub fn with_max_weight(mut self, max_weight: f64) -> Self {
        self.max_weight = max_weight;
        self
    }

    /// Set the starting skill level.
    pub fn with_skill(mut self, skill: u8) -> Self {
        self.skill = skill.min(MAX_SKILL);
        self
    }

    /// Total weight of carried items, rounded to two decimals.
    pub fn carried_weight(&self) -> f64 {
        self.inventory.total_weight()
    }

    /// Stamina needed for one move: `base + factor × carried weight`.
    pub fn move_cost(&self, base: f64, factor: f64) -> f64 {
        round2(base + factor * self.carried_weight())
    }

    /// Whether picking up `weight` more stays under the ceiling.
    pub fn can_carry(&self, weight: f64) -> bool {
        round2(self.carried_weight() + weight) <= self.max_weight
    }

    /// Record the current room in the history and step into `target`.
    pub fn enter(&mut self, target: RoomId) {
        self.history.push(self.location);
        self.location = target;
        self.moves += 1;
    }

    /// Step back to the last room in the history.
    ///
    /// Returns `None` and changes nothing when the history is empty.
    pub fn go_back(&mut self) -> Option<RoomId> {
        let previous = self.history.pop()?;
        self.location = previous;
        self.moves += 1;
        Some(previous)
    }

    /// Add a reward; returns `false` if it was already earned.
    pub fn grant_reward(&mut self, description: impl Into<String>) -> bool {
        self.rewards.insert(description.into())
    }

    /// Raise the skill level by one, up to the cap.
    pub fn train(&mut self) {
        self.skill = self.skill.saturating_add(1).min(MAX_SKILL);
    }
}
