//! Console adapter - Line-based text front end
//!
//! Parses typed commands, drives an `AdventurePort` and renders the returned
//! views as plain text. All game rules stay behind the port.

use std::io::{BufRead, Write};
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::dto::{DialogueResult, FightOutcome, InventoryView, RoomView, WorldSnapshot};
use crate::application::ports::inbound::AdventurePort;
use crate::application::services::GameError;
use crate::domain::aggregates::SessionState;
use crate::domain::value_objects::{CharacterId, Direction, ItemId};

pub const HELP: &str = "Commands:
  start                 begin a new adventure (also restarts after it ends)
  go <direction>        move north, south, east or west (n/s/e/w also work)
  look                  describe the current room again
  take [item]           pick up an item in this room
  talk [character]      talk to the character in this room
  fight [enemy]         fight the enemy in this room with what you carry
  inventory             list what you carry
  journal               show recent events
  reset                 abandon the current game
  help                  show this list
  quit                  leave the game";

// ============================================================================
// Commands
// ============================================================================

/// A parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Go(Direction),
    Look,
    /// Without a name, the only item in the room is taken
    Take(Option<String>),
    /// Without a name, the room's occupant is addressed
    Talk(Option<String>),
    Fight(Option<String>),
    Inventory,
    Journal,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Say something")]
    Empty,
    #[error("I don't understand '{0}'")]
    Unknown(String),
    #[error("Go where? Try north, south, east or west")]
    MissingDirection,
    #[error("'{0}' is not a direction")]
    InvalidDirection(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut words = input.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?.to_lowercase();
        let rest: Vec<&str> = words.collect();
        // "talk to the guard" names the same character as "talk guard"
        let argument = || {
            let mut names = rest.as_slice();
            if let [first, tail @ ..] = names {
                if first.eq_ignore_ascii_case("to") {
                    names = tail;
                }
            }
            if let [first, tail @ ..] = names {
                if ["the", "a", "an"].iter().any(|a| first.eq_ignore_ascii_case(a)) {
                    names = tail;
                }
            }
            let name = names.join(" ");
            (!name.is_empty()).then_some(name)
        };

        match verb.as_str() {
            "start" | "begin" => Ok(Command::Start),
            "go" | "move" | "walk" => {
                let direction = rest.first().ok_or(CommandError::MissingDirection)?;
                direction
                    .parse()
                    .map(Command::Go)
                    .map_err(|_| CommandError::InvalidDirection(direction.to_string()))
            }
            "look" | "l" => Ok(Command::Look),
            "take" | "get" => Ok(Command::Take(argument())),
            "talk" | "speak" => Ok(Command::Talk(argument())),
            "fight" | "attack" => Ok(Command::Fight(argument())),
            "inventory" | "inv" | "i" => Ok(Command::Inventory),
            "journal" | "log" => Ok(Command::Journal),
            "reset" => Ok(Command::Reset),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => other
                .parse()
                .map(Command::Go)
                .map_err(|_| CommandError::Unknown(other.to_string())),
        }
    }
}

/// Text produced for one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub quit: bool,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: false,
        }
    }
}

// ============================================================================
// Console
// ============================================================================

pub struct Console<P: AdventurePort> {
    port: P,
    title: String,
    action_delay: Duration,
}

impl<P: AdventurePort> Console<P> {
    pub fn new(port: P, title: impl Into<String>, action_delay: Duration) -> Self {
        Self {
            port,
            title: title.into(),
            action_delay,
        }
    }

    /// Read commands until input ends or the player quits
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "Welcome to {}!", self.title)?;
        writeln!(output, "Type 'start' to begin or 'help' for a list of commands.")?;
        prompt(&mut output)?;

        for line in input.lines() {
            let line = line.context("Failed to read command")?;
            if line.trim().is_empty() {
                prompt(&mut output)?;
                continue;
            }

            let reply = match line.parse::<Command>() {
                Ok(command) => self.execute(command),
                Err(err) => Reply::text(format!("{err}. Type 'help' for a list of commands.")),
            };
            writeln!(output, "{}", reply.text)?;
            if reply.quit {
                break;
            }
            prompt(&mut output)?;
        }
        Ok(())
    }

    pub fn execute(&mut self, command: Command) -> Reply {
        debug!(?command, "Executing command");
        if matches!(command, Command::Start | Command::Go(_) | Command::Talk(_) | Command::Fight(_)) {
            self.pause();
        }

        let result = match command {
            Command::Start => self.port.start().map(|snapshot| render_start(&snapshot)),
            Command::Go(direction) => self.port.move_to(direction).map(|room| render_room(&room)),
            Command::Look => self.port.look().map(|room| render_room(&room)),
            Command::Take(name) => self.take(name),
            Command::Talk(name) => self.talk(name),
            Command::Fight(name) => self.fight(name),
            Command::Inventory => self.port.check_inventory().map(|inventory| render_inventory(&inventory)),
            Command::Journal => Ok(self.render_journal()),
            Command::Reset => {
                self.port.reset();
                Ok("Your progress has been reset. Type 'start' to begin again.".to_string())
            }
            Command::Help => Ok(HELP.to_string()),
            Command::Quit => {
                return Reply {
                    text: "Farewell, adventurer.".to_string(),
                    quit: true,
                }
            }
        };

        Reply::text(result.unwrap_or_else(|err| render_error(&err)))
    }

    fn take(&mut self, name: Option<String>) -> Result<String, GameError> {
        let id = match name {
            Some(name) => ItemId::from_name(&name),
            None => {
                let room = self.port.look()?;
                match room.items.as_slice() {
                    [only] => only.id.clone(),
                    [] => return Ok("There is nothing here to take.".to_string()),
                    _ => return Ok("Take what? Name one of the items here.".to_string()),
                }
            }
        };
        let taken = self.port.take_item(&id)?;
        Ok(format!("You picked up the {}.", taken.item.name))
    }

    fn talk(&mut self, name: Option<String>) -> Result<String, GameError> {
        let Some(id) = self.resolve_character(name)? else {
            return Ok("There is nobody here to talk to.".to_string());
        };
        self.port.talk(&id).map(|dialogue| render_dialogue(&dialogue))
    }

    fn fight(&mut self, name: Option<String>) -> Result<String, GameError> {
        let Some(id) = self.resolve_character(name)? else {
            return Ok("There is nothing here to fight.".to_string());
        };
        self.port.fight(&id).map(|outcome| render_fight(&outcome))
    }

    /// Named characters are normalized; otherwise the room's occupant
    fn resolve_character(&mut self, name: Option<String>) -> Result<Option<CharacterId>, GameError> {
        match name {
            Some(name) => Ok(Some(CharacterId::from_name(&name))),
            None => Ok(self.port.look()?.occupant.map(|occupant| occupant.id)),
        }
    }

    fn render_journal(&self) -> String {
        let journal = self.port.journal();
        if journal.is_empty() {
            return "Nothing has happened yet.".to_string();
        }
        journal
            .iter()
            .map(|event| format!("{} {}", event.metadata().timestamp.format("%H:%M:%S"), event.event_type()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn pause(&self) {
        if !self.action_delay.is_zero() {
            thread::sleep(self.action_delay);
        }
    }
}

fn prompt<W: Write>(output: &mut W) -> Result<()> {
    write!(output, "> ")?;
    output.flush().context("Failed to flush output")
}

// ============================================================================
// Rendering
// ============================================================================

pub fn render_start(snapshot: &WorldSnapshot) -> String {
    let title = snapshot.world_name.as_deref().unwrap_or("the adventure");
    match &snapshot.room {
        Some(room) => format!("Your journey through {title} begins.\n\n{}", render_room(room)),
        None => format!("Your journey through {title} begins."),
    }
}

pub fn render_room(room: &RoomView) -> String {
    let mut lines = vec![format!("== {} ==", room.name), room.narration.clone()];
    if let Some(occupant) = &room.occupant {
        lines.push(occupant.greeting.clone());
    }
    let exits = room.exit_details();
    if exits.is_empty() {
        lines.push("There are no exits.".to_string());
    } else {
        lines.extend(exits);
    }
    lines.join("\n")
}

pub fn render_inventory(inventory: &InventoryView) -> String {
    if inventory.is_empty() {
        return "Inventory\nEmpty".to_string();
    }
    let mut lines = vec!["Inventory".to_string()];
    lines.extend(
        inventory
            .items
            .iter()
            .map(|item| format!("- {}: {}", item.name, item.description)),
    );
    lines.join("\n")
}

pub fn render_dialogue(dialogue: &DialogueResult) -> String {
    if dialogue.unlocked {
        format!("{}\nNew passages are open to you.", dialogue.text)
    } else {
        dialogue.text.clone()
    }
}

pub fn render_fight(outcome: &FightOutcome) -> String {
    match outcome {
        FightOutcome::EnemyDefeated { enemy, weapon } => {
            format!("You are fighting {enemy}!\nYou defeated the {enemy} using the {weapon}!")
        }
        FightOutcome::GameWon { enemy, weapon, .. } => format!(
            "You are fighting {enemy}!\nYou defeated the {enemy} using the {weapon}!\n\
             Congratulations! You have defeated all the enemies and won the game!\n\
             Type 'start' to play again."
        ),
        FightOutcome::GameOver { enemy } => format!(
            "You are fighting {enemy}!\nYou were defeated by the {enemy}! Game Over.\n\
             Type 'start' to play again."
        ),
    }
}

pub fn render_error(err: &GameError) -> String {
    match err {
        GameError::InvalidDirection { .. } => "You can't go that way.".to_string(),
        GameError::InvalidSessionState {
            state: SessionState::NotStarted,
            ..
        } => "The adventure has not begun. Type 'start' to begin.".to_string(),
        GameError::InvalidSessionState { state, .. } if state.is_terminal() => {
            "The game is over. Type 'start' to play again.".to_string()
        }
        GameError::ItemNotAvailable(_) => "You don't see that here.".to_string(),
        GameError::CharacterNotPresent(_) => "There is nobody like that here.".to_string(),
        GameError::NotAnEnemy(id) => format!("You have no quarrel with {id}."),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::WorldService;
    use crate::domain::value_objects::SessionSettings;
    use crate::infrastructure::castle::castle_blueprint;
    use crate::infrastructure::session_adapter::SessionAdapter;

    fn console() -> Console<SessionAdapter> {
        let worlds = WorldService::new(castle_blueprint()).unwrap();
        let adapter = SessionAdapter::new(worlds, &SessionSettings::default());
        Console::new(adapter, "Castle Adventure", Duration::ZERO)
    }

    fn play(script: &str) -> String {
        let mut console = console();
        let mut output = Vec::new();
        console.run(script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("start".parse::<Command>(), Ok(Command::Start));
        assert_eq!("go north".parse::<Command>(), Ok(Command::Go(Direction::North)));
        assert_eq!("W".parse::<Command>(), Ok(Command::Go(Direction::West)));
        assert_eq!(
            "take Royal Seal".parse::<Command>(),
            Ok(Command::Take(Some("Royal Seal".to_string())))
        );
        assert_eq!(
            "talk to the guard".parse::<Command>(),
            Ok(Command::Talk(Some("guard".to_string())))
        );
        assert_eq!(
            "take the Royal Seal".parse::<Command>(),
            Ok(Command::Take(Some("Royal Seal".to_string())))
        );
        assert_eq!(
            "fight a dragon".parse::<Command>(),
            Ok(Command::Fight(Some("dragon".to_string())))
        );
        assert_eq!("talk to".parse::<Command>(), Ok(Command::Talk(None)));
        assert_eq!("talk".parse::<Command>(), Ok(Command::Talk(None)));
        assert_eq!("i".parse::<Command>(), Ok(Command::Inventory));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("go".parse::<Command>(), Err(CommandError::MissingDirection));
        assert_eq!(
            "go up".parse::<Command>(),
            Err(CommandError::InvalidDirection("up".to_string()))
        );
        assert_eq!(
            "dance".parse::<Command>(),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }

    #[test]
    fn test_commands_before_start() {
        let mut console = console();
        let reply = console.execute(Command::Go(Direction::North));
        assert_eq!(reply.text, "The adventure has not begun. Type 'start' to begin.");
        assert!(!reply.quit);
        assert!(console.execute(Command::Quit).quit);
    }

    #[test]
    fn test_room_rendering() {
        let mut console = console();
        let start = console.execute(Command::Start).text;
        assert!(start.contains("== Castle Entrance =="));
        assert!(start.contains("The Great Hall is to the north"));
        assert!(start.contains("The Wizard's Tower is to the east"));

        let tower = console.execute(Command::Go(Direction::East)).text;
        assert!(tower.contains("You see the following items:\n- Royal Seal: The official seal of the royal family"));
        assert!(tower.contains("You have met Wizard, An ancient wizard in flowing robes"));

        let blocked = console.execute(Command::Go(Direction::North)).text;
        assert_eq!(blocked, "You can't go that way.");
    }

    #[test]
    fn test_take_without_name_picks_only_item() {
        let mut console = console();
        console.execute(Command::Start);
        assert_eq!(console.execute(Command::Take(None)).text, "There is nothing here to take.");

        console.execute(Command::Go(Direction::East));
        assert_eq!(console.execute(Command::Take(None)).text, "You picked up the Royal Seal.");
        assert_eq!(
            console.execute(Command::Inventory).text,
            "Inventory\n- Royal Seal: The official seal of the royal family"
        );
    }

    #[test]
    fn test_scripted_victory() {
        let output = play(
            "start\neast\ntake\nwest\nnorth\ntalk\nwest\nwest\ntake holy sword\ntake dragon slayer\n\
             east\nsouth\nfight\neast\nfight dragon\nquit\n",
        );
        assert!(output.starts_with("Welcome to Castle Adventure!"));
        assert!(output.contains("New passages are open to you."));
        assert!(output.contains("== Throne Room =="));
        assert!(output.contains("You defeated the Skeleton Warrior using the Holy Sword!"));
        assert!(output.contains("Congratulations! You have defeated all the enemies and won the game!"));
        assert!(output.ends_with("Farewell, adventurer.\n"));
    }

    #[test]
    fn test_scripted_defeat_then_restart() {
        let output = play(
            "start\neast\ntake\nwest\nnorth\ntalk guard\nwest\nsouth\nfight skeleton warrior\nlook\nstart\n",
        );
        let (_, after_loss) = output
            .split_once("You were defeated by the Skeleton Warrior! Game Over.")
            .unwrap();
        assert!(after_loss.contains("The game is over. Type 'start' to play again."));
        assert!(after_loss.contains("Your journey through Castle Adventure begins."));
        assert!(after_loss.contains("== Castle Entrance =="));
    }

    #[test]
    fn test_articles_resolve_to_occupant() {
        let mut console = console();
        console.execute(Command::Start);
        console.execute(Command::Go(Direction::North));

        let reply = console.execute("talk to the guard".parse().unwrap());
        assert!(reply.text.starts_with("Guard says 'Halt, traveler!"));

        console.execute(Command::Go(Direction::South));
        console.execute(Command::Go(Direction::East));
        let taken = console.execute("take the royal seal".parse().unwrap());
        assert_eq!(taken.text, "You picked up the Royal Seal.");
    }

    #[test]
    fn test_unknown_command_hint() {
        let output = play("dance\n");
        assert!(output.contains("I don't understand 'dance'. Type 'help' for a list of commands."));
    }
}
