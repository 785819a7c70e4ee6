//! Quest definitions and the ledger that tracks their progress.
//!
//! Quests are registered at setup time in an inactive state. Activation is
//! explicit or triggered by dialogue. Action handlers report what the player
//! did through [`QuestLedger::check_action_objectives`]; a quest whose
//! objectives all reach their target completes and hands back its reward.
//! Completion is terminal: progress is frozen from then on.

use std::fmt;

use log::{debug, info};

use crate::error::{WorldError, WorldResult};

/// The kind of player action an objective counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Picking up an item.
    Take,
    /// Putting down an item.
    Drop,
    /// Using an item.
    Use,
    /// Talking to an NPC.
    Talk,
    /// Entering a room.
    Visit,
    /// Moving at all. Tracked through the player's move counter.
    Move,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Take => "take",
            Self::Drop => "drop",
            Self::Use => "use",
            Self::Talk => "talk",
            Self::Visit => "visit",
            Self::Move => "move",
        };
        f.write_str(name)
    }
}

/// A countable sub-goal of a quest.
#[derive(Debug, Clone, PartialEq)]
pub struct Objective {
    /// Text shown in quest details.
    pub description: String,
    /// Which actions count toward it.
    pub kind: ActionKind,
    /// Required subject (item, NPC, or room name). `None` matches anything.
    pub subject: Option<String>,
    /// Count needed to meet the objective.
    pub target: u32,
    /// Count reached so far.
    pub progress: u32,
}

impl Objective {
    /// Create an objective counting `kind` actions on `subject`.
    pub fn new(
        description: impl Into<String>,
        kind: ActionKind,
        subject: Option<&str>,
        target: u32,
    ) -> Self {
        Self {
            description: description.into(),
            kind,
            subject: subject.map(str::to_string),
            target,
            progress: 0,
        }
    }

    /// Whether the target count has been reached.
    pub fn is_met(&self) -> bool {
        self.progress >= self.target
    }

    fn matches(&self, kind: ActionKind, subject: &str) -> bool {
        self.kind == kind
            && self
                .subject
                .as_ref()
                .is_none_or(|s| s.to_lowercase() == subject.to_lowercase())
    }

    fn increment(&mut self) {
        self.progress = self.progress.saturating_add(1).min(self.target);
    }

    fn raise_to(&mut self, value: u32) {
        self.progress = self.progress.max(value.min(self.target));
    }
}

/// What completing a quest grants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reward {
    /// Reward text added to the player's reward set.
    pub description: String,
    /// Coins added to the player's purse.
    pub coins: u32,
}

impl Reward {
    /// Create a reward.
    pub fn new(description: impl Into<String>, coins: u32) -> Self {
        Self {
            description: description.into(),
            coins,
        }
    }
}

/// A quest.
#[derive(Debug, Clone)]
pub struct Quest {
    /// Unique title.
    pub title: String,
    /// One-line summary.
    pub description: String,
    /// Text shown in quest details.
    pub long_description: String,
    /// Whether the quest is underway.
    pub is_active: bool,
    /// Whether the quest is finished. Terminal.
    pub is_completed: bool,
    /// Sub-goals, in display order.
    pub objectives: Vec<Objective>,
    /// Granted on completion.
    pub reward: Reward,
}

impl Quest {
    /// Create an inactive quest with no objectives.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            long_description: String::new(),
            is_active: false,
            is_completed: false,
            objectives: Vec::new(),
            reward: Reward::default(),
        }
    }

    /// Set the long description.
    pub fn with_long_description(mut self, text: impl Into<String>) -> Self {
        self.long_description = text.into();
        self
    }

    /// Add an objective.
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objectives.push(objective);
        self
    }

    /// Set the reward.
    pub fn with_reward(mut self, reward: Reward) -> Self {
        self.reward = reward;
        self
    }

    /// Whether every objective is met.
    pub fn all_objectives_met(&self) -> bool {
        !self.objectives.is_empty() && self.objectives.iter().all(Objective::is_met)
    }

    fn defect(&self) -> Option<String> {
        if self.objectives.is_empty() {
            return Some("it has no objectives".to_string());
        }
        self.objectives.iter().find_map(|o| {
            if o.target == 0 {
                Some(format!("objective '{}' has a target of zero", o.description))
            } else if o.kind == ActionKind::Move && o.subject.is_some() {
                Some(format!("objective '{}' counts moves but names a subject", o.description))
            } else {
                None
            }
        })
    }

    fn status_label(&self) -> &'static str {
        if self.is_completed {
            "terminée"
        } else if self.is_active {
            "en cours"
        } else {
            "inactive"
        }
    }

    /// Complete the quest if every objective is met, returning its reward.
    fn try_complete(&mut self) -> Option<Reward> {
        if self.is_active && !self.is_completed && self.all_objectives_met() {
            self.is_active = false;
            self.is_completed = true;
            info!("quest completed: {}", self.title);
            Some(self.reward.clone())
        } else {
            None
        }
    }
}

/// Continuously tracked statistics that objectives can display live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LiveCounters {
    /// Cumulative successful moves.
    pub moves: u32,
}

impl LiveCounters {
    /// The live value behind objectives of `kind`, if one is tracked.
    pub fn get(&self, kind: ActionKind) -> Option<u32> {
        match kind {
            ActionKind::Move => Some(self.moves),
            _ => None,
        }
    }
}

/// All quests known to a player, in registration order.
#[derive(Debug, Clone, Default)]
pub struct QuestLedger {
    quests: Vec<Quest>,
}

impl QuestLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a quest. Titles must be unique (case-insensitive).
    ///
    /// Rejects quests that could never complete: no objectives, an objective
    /// with a zero target, or a move objective restricted to a subject.
    pub fn add_quest(&mut self, quest: Quest) -> WorldResult<()> {
        if self.get(&quest.title).is_some() {
            return Err(WorldError::DuplicateQuest(quest.title));
        }
        if let Some(reason) = quest.defect() {
            return Err(WorldError::UncompletableQuest {
                quest: quest.title,
                reason,
            });
        }
        self.quests.push(quest);
        Ok(())
    }

    /// Find a quest by title (case-insensitive).
    pub fn get(&self, title: &str) -> Option<&Quest> {
        let title = title.to_lowercase();
        self.quests.iter().find(|q| q.title.to_lowercase() == title)
    }

    fn get_mut(&mut self, title: &str) -> Option<&mut Quest> {
        let title = title.to_lowercase();
        self.quests
            .iter_mut()
            .find(|q| q.title.to_lowercase() == title)
    }

    /// Iterate over all quests.
    pub fn iter(&self) -> std::slice::Iter<'_, Quest> {
        self.quests.iter()
    }

    /// Whether the titled quest is active.
    pub fn is_active(&self, title: &str) -> bool {
        self.get(title).is_some_and(|q| q.is_active)
    }

    /// Whether the titled quest is completed.
    pub fn is_completed(&self, title: &str) -> bool {
        self.get(title).is_some_and(|q| q.is_completed)
    }

    /// Activate a quest.
    ///
    /// Returns `false` when the title is unknown or the quest is already
    /// active or completed.
    pub fn activate_quest(&mut self, title: &str) -> bool {
        match self.get_mut(title) {
            Some(quest) if !quest.is_active && !quest.is_completed => {
                quest.is_active = true;
                debug!("quest activated: {}", quest.title);
                true
            }
            _ => false,
        }
    }

    /// Count one `kind` action on `subject` toward active quests.
    ///
    /// Each unmet matching objective advances by one. Returns the rewards of
    /// quests completed by this action.
    pub fn check_action_objectives(&mut self, kind: ActionKind, subject: &str) -> Vec<Reward> {
        let mut rewards = Vec::new();
        for quest in self.quests.iter_mut().filter(|q| q.is_active) {
            let mut advanced = false;
            for objective in quest.objectives.iter_mut() {
                if !objective.is_met() && objective.matches(kind, subject) {
                    objective.increment();
                    advanced = true;
                    debug!(
                        "quest '{}': {} {}/{}",
                        quest.title, objective.description, objective.progress, objective.target
                    );
                }
            }
            if advanced {
                rewards.extend(quest.try_complete());
            }
        }
        rewards
    }

    /// Raise counter-tracked objectives of `kind` to `value`.
    ///
    /// Used for statistics such as the move count that the ledger does not own.
    /// Progress only ever goes up. Returns the rewards of completed quests.
    pub fn check_counter_objectives(&mut self, kind: ActionKind, value: u32) -> Vec<Reward> {
        let mut rewards = Vec::new();
        for quest in self.quests.iter_mut().filter(|q| q.is_active) {
            let mut advanced = false;
            for objective in quest.objectives.iter_mut() {
                if objective.kind == kind && objective.subject.is_none() && !objective.is_met() {
                    let before = objective.progress;
                    objective.raise_to(value);
                    advanced |= objective.progress != before;
                }
            }
            if advanced {
                rewards.extend(quest.try_complete());
            }
        }
        rewards
    }

    /// One line per quest with its status.
    pub fn show_quests(&self) -> String {
        if self.quests.is_empty() {
            return "\nAucune quête disponible.\n".to_string();
        }
        let mut output = "\nQuêtes :\n".to_string();
        for quest in &self.quests {
            output.push_str(&format!(
                "  - {} [{}] : {}\n",
                quest.title,
                quest.status_label(),
                quest.description
            ));
        }
        output
    }

    /// Full details of a quest, or `None` if the title is unknown.
    ///
    /// Objectives backed by a live counter show the counter's current value
    /// (capped at the target) unless the quest is already completed.
    pub fn show_quest_details(&self, title: &str, live: &LiveCounters) -> Option<String> {
        let quest = self.get(title)?;
        let mut output = format!("\n{} [{}]\n", quest.title, quest.status_label());
        if quest.long_description.is_empty() {
            output.push_str(&format!("{}\n", quest.description));
        } else {
            output.push_str(&format!("{}\n", quest.long_description));
        }
        if !quest.objectives.is_empty() {
            output.push_str("Objectifs :\n");
            for objective in &quest.objectives {
                let shown = match live.get(objective.kind) {
                    Some(value) if !quest.is_completed && objective.subject.is_none() => {
                        value.min(objective.target).max(objective.progress)
                    }
                    _ => objective.progress,
                };
                let mark = if shown >= objective.target { "x" } else { " " };
                output.push_str(&format!(
                    "  [{mark}] {} ({}/{})\n",
                    objective.description, shown, objective.target
                ));
            }
        }
        if !quest.reward.description.is_empty() {
            output.push_str(&format!("Récompense : {}\n", quest.reward.description));
        }
        Some(output)
    }
}
