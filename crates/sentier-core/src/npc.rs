use std::collections::VecDeque;
use std::fmt;

use crate::room::RoomId;

/// Stable index of an NPC in the world arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NpcId(pub(crate) usize);

impl NpcId {
    /// The raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NpcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "npc#{}", self.0)
    }
}

/// A cyclic script of dialogue lines.
///
/// Lines are handed out front to back. When the pending queue runs dry it is
/// refilled from the authored script, so the cycle never ends.
#[derive(Debug, Clone, Default)]
pub struct DialogueCycle {
    script: Vec<String>,
    pending: VecDeque<String>,
}

impl DialogueCycle {
    /// Create a cycle over `lines`.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let script: Vec<String> = lines.into_iter().map(Into::into).collect();
        let pending = script.iter().cloned().collect();
        Self { script, pending }
    }

    /// The next line, or `None` if the script is empty.
    pub fn next_line(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            self.pending.extend(self.script.iter().cloned());
        }
        self.pending.pop_front()
    }

    /// Start over from the first line.
    pub fn restart(&mut self) {
        self.pending = self.script.iter().cloned().collect();
    }

    /// Number of lines in the authored script.
    pub fn len(&self) -> usize {
        self.script.len()
    }

    /// Whether the authored script has no lines.
    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }
}

/// Quest-driven lines that replace an NPC's generic dialogue.
///
/// Which line is spoken depends on the state of `quest` and on whether the
/// player carries `item`. The generic cycle is left untouched.
#[derive(Debug, Clone)]
pub struct QuestDialogue {
    /// Title of the quest the lines are tied to.
    pub quest: String,
    /// Item whose possession resolves the quest line.
    pub item: String,
    /// Spoken while the quest is inactive. Speaking it activates the quest.
    pub trigger_line: String,
    /// Spoken while the quest is active and the item is missing.
    pub pending_line: String,
    /// Spoken once the player carries the item.
    pub resolved_line: String,
}

/// A non-player character.
#[derive(Debug, Clone)]
pub struct Npc {
    /// Unique name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// The room the NPC is in.
    pub location: RoomId,
    /// Generic dialogue.
    pub dialogue: DialogueCycle,
    /// Quest-driven override of the generic dialogue.
    pub quest_line: Option<QuestDialogue>,
    /// Coins a successful theft takes.
    pub purse: u32,
}

impl Npc {
    /// Create an NPC in `location` speaking `lines` in a cycle.
    pub fn new<I, S>(
        name: impl Into<String>,
        description: impl Into<String>,
        location: RoomId,
        lines: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            location,
            dialogue: DialogueCycle::new(lines),
            quest_line: None,
            purse: 0,
        }
    }

    /// Attach quest-driven lines.
    pub fn with_quest_line(mut self, quest_line: QuestDialogue) -> Self {
        self.quest_line = Some(quest_line);
        self
    }

    /// Give the NPC coins to steal.
    pub fn with_purse(mut self, coins: u32) -> Self {
        self.purse = coins;
        self
    }
}

impl fmt::Display for Npc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.name, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_restarts_after_last_line() {
        let mut cycle = DialogueCycle::new(["Je suis Gandalf", "Abracadabra !"]);
        assert_eq!(cycle.next_line().as_deref(), Some("Je suis Gandalf"));
        assert_eq!(cycle.next_line().as_deref(), Some("Abracadabra !"));
        assert_eq!(cycle.next_line().as_deref(), Some("Je suis Gandalf"));
        assert_eq!(cycle.next_line().as_deref(), Some("Abracadabra !"));
    }

    #[test]
    fn single_line_repeats() {
        let mut cycle = DialogueCycle::new(["Bonjour"]);
        for _ in 0..3 {
            assert_eq!(cycle.next_line().as_deref(), Some("Bonjour"));
        }
    }

    #[test]
    fn empty_script_yields_nothing() {
        let mut cycle = DialogueCycle::new(Vec::<String>::new());
        assert!(cycle.is_empty());
        assert_eq!(cycle.next_line(), None);
    }

    #[test]
    fn restart_rewinds() {
        let mut cycle = DialogueCycle::new(["un", "deux", "trois"]);
        cycle.next_line();
        cycle.next_line();
        cycle.restart();
        assert_eq!(cycle.next_line().as_deref(), Some("un"));
        assert_eq!(cycle.len(), 3);
    }

    #[test]
    fn npc_display() {
        let npc = Npc::new("Gandalf", "un magicien blanc", RoomId(0), ["Bonjour"]).with_purse(12);
        assert_eq!(npc.to_string(), "Gandalf : un magicien blanc");
        assert_eq!(npc.purse, 12);
        assert!(npc.quest_line.is_none());
    }
}
