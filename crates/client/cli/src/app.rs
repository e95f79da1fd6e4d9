//! Glue tying config, catalogs, the game session, and the terminal together.

use std::str::FromStr;
use std::time::Instant;

use anyhow::Result;
use crossterm::style::Stylize;
use strum::IntoEnumIterator;

use depths_core::{Command, Game, GameMode, PcgRng, PlayerClass, PlayerState, RoomId};

use crate::config::CliConfig;
use crate::input::{LineEditor, ReadResult, RustylineEditor};
use crate::render;

/// Room every fresh character starts in.
const START_ROOM: &str = "entry";

pub struct App<E: LineEditor> {
    config: CliConfig,
    editor: E,
    started: Instant,
}

impl App<RustylineEditor> {
    pub fn new(config: CliConfig) -> Result<Self> {
        Ok(Self::with_editor(config, RustylineEditor::new()?))
    }
}

impl<E: LineEditor> App<E> {
    pub fn with_editor(config: CliConfig, editor: E) -> Self {
        Self {
            config,
            editor,
            started: Instant::now(),
        }
    }

    /// Run one full session: banner, character creation, game loop.
    pub fn run(&mut self) -> Result<()> {
        render::banner();

        let world = depths_content::load_world(&self.config.data_dir)?;
        tracing::info!(rooms = world.room_count(), "catalogs loaded");

        let Some((name, class)) = create_character(&mut self.editor)? else {
            render::farewell();
            return Ok(());
        };

        let seed = self.config.seed.unwrap_or_else(seed_from_clock);
        tracing::info!(seed, %class, "session starting");

        let player = PlayerState::new(name, class, RoomId::new(START_ROOM));
        let mut game = Game::new(world, player, seed)?;
        let rng = PcgRng;

        render::welcome();
        render::print_room(game.world(), game.current_room()?, game.player())?;

        while game.running() {
            if game.player().debug_mode {
                render::print_debug_overlay(&game, self.elapsed_secs());
            }

            let prompt = match game.mode() {
                GameMode::InCombat => "\nEnter your action: ",
                _ => "\nEnter command (q to quit): ",
            };

            match self.editor.read_line(prompt)? {
                ReadResult::Line(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    self.editor.add_history(&line);

                    let command = Command::parse(&line);
                    tracing::debug!(?command, mode = ?game.mode(), "dispatching");

                    let events = game.dispatch(command, &rng)?;
                    render::print_events(&game, &events, self.elapsed_secs())?;
                }
                ReadResult::Interrupted => {
                    println!("\nGame terminated by user");
                    break;
                }
                ReadResult::Eof => break,
            }
        }

        if game.mode() == GameMode::GameOver {
            tracing::info!(
                steps = game.player().steps_taken,
                defeated = game.player().enemies_defeated,
                "game over"
            );
        }

        render::farewell();
        Ok(())
    }

    fn elapsed_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}

/// Prompt for a name and a class, re-prompting until both are valid.
///
/// Returns `None` when input ends before a character exists.
fn create_character(editor: &mut impl LineEditor) -> Result<Option<(String, PlayerClass)>> {
    let name = loop {
        match editor.read_line("Enter your name: ")? {
            ReadResult::Line(line) => {
                let line = line.trim();
                if !line.is_empty() {
                    break line.to_string();
                }
            }
            ReadResult::Interrupted | ReadResult::Eof => return Ok(None),
        }
    };

    let classes = PlayerClass::iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let class = loop {
        match editor.read_line(&format!("Choose your class ({classes}): "))? {
            ReadResult::Line(line) => match PlayerClass::from_str(line.trim()) {
                Ok(class) => break class,
                Err(_) => println!("{}", format!("Pick one of: {classes}").red()),
            },
            ReadResult::Interrupted | ReadResult::Eof => return Ok(None),
        }
    };

    Ok(Some((name, class)))
}

/// Wall-clock fallback seed when `DEPTHS_SEED` is not set.
fn seed_from_clock() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
