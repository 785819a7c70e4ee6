//! The game session: world state, command dispatch, and the turn loop.

use std::fmt;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use sentier_core::{Player, Room, World};

use crate::actions::standard_commands;
use crate::command::CommandTable;
use crate::config::EngineConfig;
use crate::error::{ActionError, EngineResult};
use crate::io::{LineInput, LineOutput};
use crate::tick::{NpcMove, npc_tick};

/// How a line of input was handled.
#[derive(Debug)]
pub enum TurnStatus {
    /// The line was blank.
    Ignored,
    /// The command was rejected. Nothing changed.
    Failed(ActionError),
    /// The command ran.
    Succeeded,
}

/// The outcome of one line of input.
#[derive(Debug)]
pub struct Turn {
    /// How the line was handled.
    pub status: TurnStatus,
    /// Text produced by the command and, when tracing, by the NPC tick.
    pub output: Vec<String>,
    /// NPC moves made by the tick that followed the command.
    pub npc_moves: Vec<NpcMove>,
    /// Whether the world advanced by one turn.
    pub advanced: bool,
}

impl Turn {
    fn ignored() -> Self {
        Self {
            status: TurnStatus::Ignored,
            output: Vec::new(),
            npc_moves: Vec::new(),
            advanced: false,
        }
    }

    fn failed(error: ActionError) -> Self {
        Self {
            status: TurnStatus::Failed(error),
            output: Vec::new(),
            npc_moves: Vec::new(),
            advanced: false,
        }
    }

    /// Whether the command ran.
    pub fn is_success(&self) -> bool {
        matches!(self.status, TurnStatus::Succeeded)
    }

    /// The rejection, if the command failed.
    pub fn error(&self) -> Option<&ActionError> {
        match &self.status {
            TurnStatus::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// All output joined into one string.
    pub fn text(&self) -> String {
        self.output.join("\n")
    }
}

/// A running game.
///
/// Owns the world, the player, the command table, and the random source.
/// Input is processed one line at a time; each line runs to completion,
/// including the NPC tick, before the next is read.
pub struct Game {
    pub(crate) world: World,
    pub(crate) player: Player,
    pub(crate) commands: CommandTable,
    pub(crate) config: EngineConfig,
    pub(crate) rng: Box<dyn RngCore>,
    pub(crate) turn: u64,
    pub(crate) finished: bool,
}

impl Game {
    /// Create a game with the standard commands.
    ///
    /// Fails if the world is malformed, the player stands outside it, or the
    /// configuration is unusable.
    pub fn new(world: World, player: Player, config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        world.validate()?;
        world.room(player.location)?;

        let rng: Box<dyn RngCore> = match config.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(StdRng::from_os_rng()),
        };

        let mut commands = CommandTable::new();
        for command in standard_commands() {
            commands.register(command);
        }

        info!(
            "game created: {} rooms, player '{}'",
            world.room_count(),
            player.name
        );
        Ok(Self {
            world,
            player,
            commands,
            config,
            rng,
            turn: 0,
            finished: false,
        })
    }

    /// Replace the random source.
    pub fn with_rng(mut self, rng: impl RngCore + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// The world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Mutable access to the player.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// The command table.
    pub fn commands(&self) -> &CommandTable {
        &self.commands
    }

    /// Mutable access to the command table, to add or replace commands.
    pub fn commands_mut(&mut self) -> &mut CommandTable {
        &mut self.commands
    }

    /// The configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Turns elapsed so far.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Whether the player has quit.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The room the player stands in.
    pub fn current_room(&self) -> Result<&Room, ActionError> {
        Ok(self.world.room(self.player.location)?)
    }

    /// The greeting shown before the first prompt.
    pub fn welcome(&self) -> EngineResult<String> {
        let room = self.world.room(self.player.location)?;
        Ok(format!(
            "\nBienvenue {} dans ce jeu d'aventure !\nEntrez 'help' si vous avez besoin d'aide.\n{}",
            self.player.name,
            room.long_description()
        ))
    }

    /// Handle one line of input.
    pub fn process_line(&mut self, line: &str) -> Turn {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&word, params)) = tokens.split_first() else {
            return Turn::ignored();
        };

        let Some(command) = self.commands.get(word) else {
            let suggestion = self.commands.suggest(word).map(str::to_string);
            return Turn::failed(ActionError::UnknownCommand {
                word: word.to_string(),
                suggestion,
            });
        };
        let handler = command.handler;
        let advances_turn = command.advances_turn;

        if let Err(e) = command.arity.check(word, params) {
            return Turn::failed(e);
        }

        let text = match handler(self, params) {
            Ok(text) => text,
            Err(e) => {
                debug!("'{word}' failed: {e}");
                return Turn::failed(e);
            }
        };

        let mut turn = Turn {
            status: TurnStatus::Succeeded,
            output: vec![text],
            npc_moves: Vec::new(),
            advanced: false,
        };
        if advances_turn {
            self.advance(&mut turn);
        }
        turn
    }

    fn advance(&mut self, turn: &mut Turn) {
        self.turn += 1;
        turn.advanced = true;
        match npc_tick(&mut self.world, &mut *self.rng, self.config.npc_move_chance) {
            Ok(moves) => {
                if self.config.trace_npcs {
                    for m in &moves {
                        let from = self.world.room(m.from).map(|r| r.name.as_str()).unwrap_or("?");
                        let to = self.world.room(m.to).map(|r| r.name.as_str()).unwrap_or("?");
                        turn.output
                            .push(format!("[PNJ] {} s'est déplacé de {from} vers {to}", m.name));
                    }
                }
                turn.npc_moves = moves;
            }
            Err(e) => warn!("NPC tick failed on turn {}: {e}", self.turn),
        }
    }

    /// Run the read-process-print loop until `quit` or end of input.
    pub fn run<I, O>(&mut self, input: &mut I, output: &mut O) -> EngineResult<()>
    where
        I: LineInput + ?Sized,
        O: LineOutput + ?Sized,
    {
        output.write_line(&self.welcome()?)?;
        while !self.finished {
            let Some(line) = input.read_line()? else {
                debug!("end of input");
                break;
            };
            let turn = self.process_line(&line);
            if let Some(e) = turn.error() {
                output.write_error(&format!("\n{e}\n"))?;
            }
            for text in &turn.output {
                output.write_line(text)?;
            }
        }
        info!("game over after {} turns", self.turn);
        Ok(())
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("world", &self.world)
            .field("player", &self.player)
            .field("commands", &self.commands)
            .field("config", &self.config)
            .field("turn", &self.turn)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}
