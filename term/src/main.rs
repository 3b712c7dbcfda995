use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use web_time::Instant;

use mineclear_core::{
    CellCount, Coord, GameConfig, GameSession, RandomBoardGenerator, RevealOutcome,
};

use crate::clock::TickClock;
use crate::command::{Command, HELP};

mod clock;
mod command;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Clear the minefield from your terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Number of rows
    #[arg(long, default_value_t = 9)]
    rows: Coord,

    /// Number of columns
    #[arg(long, default_value_t = 9)]
    cols: Coord,

    /// Number of mines
    #[arg(short, long, default_value_t = 10)]
    mines: CellCount,

    /// Force a seed instead of random, only applies to the first game
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the session snapshot as JSON after every command
    #[arg(long)]
    json: bool,
}

/// Presentation loop: owns the session, forwards intents and redraws after each one.
struct Frontend {
    config: GameConfig,
    session: GameSession,
    clock: TickClock,
    json: bool,
}

impl Frontend {
    fn new(config: GameConfig, seed: Option<u64>, json: bool) -> Result<Self> {
        let generator = seed.map_or_else(RandomBoardGenerator::from_entropy, RandomBoardGenerator::new);
        log::info!("Starting game with seed {}", generator.seed());
        Ok(Self {
            config,
            session: GameSession::new_game(config, generator)?,
            clock: TickClock::start(Instant::now()),
            json,
        })
    }

    fn new_game(&mut self, config: Option<GameConfig>) -> Result<()> {
        let config = config.unwrap_or(self.config);
        self.session = GameSession::new_random(config).context("could not start a new game")?;
        self.config = config;
        self.clock = TickClock::start(Instant::now());
        Ok(())
    }

    /// Forwards whole seconds of wall-clock time to the session while it is running.
    fn catch_up(&mut self) {
        let due = self.clock.due(Instant::now());
        for _ in 0..due {
            if self.session.is_game_over() {
                break;
            }
            self.session.tick();
        }
    }

    /// Applies one command. Returns `false` once the player quits.
    fn handle(&mut self, command: Command, out: &mut impl Write) -> Result<bool> {
        match command {
            Command::Reveal(pos) => match self.session.reveal_cell(pos) {
                RevealOutcome::HitMine => log::info!("Hit a mine at {:?}", pos),
                RevealOutcome::Won => log::info!("Cleared the board in {}s", self.session.elapsed_secs()),
                RevealOutcome::Revealed | RevealOutcome::NoChange => {}
            },
            Command::Flag(pos) => {
                if !self.session.toggle_flag(pos).has_update() {
                    log::debug!("Flag at {:?} had no effect", pos);
                }
            }
            Command::NewGame(config) => self.new_game(config)?,
            Command::Tick => {
                self.session.tick();
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                return Ok(true);
            }
            Command::Quit => return Ok(false),
        }
        self.draw(out)?;
        Ok(true)
    }

    fn draw(&self, out: &mut impl Write) -> Result<()> {
        let snapshot = self.session.snapshot();
        writeln!(out, "{}", render::BoardView(&snapshot))?;
        if self.json {
            serde_json::to_writer(&mut *out, &snapshot).context("failed to encode snapshot")?;
            writeln!(out)?;
        }
        Ok(())
    }

    fn run(&mut self, input: impl BufRead, mut out: impl Write) -> Result<()> {
        self.draw(&mut out)?;
        for line in input.lines() {
            let line = line.context("failed to read input")?;
            self.catch_up();
            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    writeln!(out, "{err:#}")?;
                    continue;
                }
            };
            if !self.handle(command, &mut out)? {
                break;
            }
            out.flush()?;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = GameConfig::new((args.rows, args.cols), args.mines).context("invalid board settings")?;
    log::debug!("config: {:?}", config);

    let mut frontend = Frontend::new(config, args.seed, args.json)?;
    frontend.run(io::stdin().lock(), io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(frontend: &mut Frontend, script: &str) -> String {
        let mut out = Vec::new();
        frontend.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn args_default_to_beginner_board() {
        let args = Args::try_parse_from(["mineclear"]).unwrap();
        assert_eq!((args.rows, args.cols, args.mines), (9, 9, 10));
        assert_eq!(args.seed, None);
        assert!(!args.json);
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let config = GameConfig::new((6, 6), 5).unwrap();
        let first = Frontend::new(config, Some(11), false).unwrap();
        let second = Frontend::new(config, Some(11), false).unwrap();
        assert_eq!(first.session, second.session);
    }

    #[test]
    fn script_wins_empty_board() {
        let mut frontend = Frontend::new(GameConfig::new((2, 2), 0).unwrap(), Some(3), false).unwrap();

        let text = play(&mut frontend, "t\nr 0 0\nq\nr 1 1\n");

        assert!(frontend.session.is_won());
        assert_eq!(frontend.session.elapsed_secs(), 1);
        assert!(text.contains("you won!"), "{text}");
    }

    #[test]
    fn bad_lines_report_errors_and_continue() {
        let mut frontend = Frontend::new(GameConfig::new((3, 3), 1).unwrap(), Some(5), false).unwrap();

        let text = play(&mut frontend, "bogus\n\nf 0 0\n");

        assert!(text.contains("unrecognized command"), "{text}");
        assert!(frontend.session.board()[(0, 0)].is_flagged());
        assert_eq!(frontend.session.mines_left(), 0);
    }

    #[test]
    fn new_game_replaces_session_and_config() {
        let mut frontend = Frontend::new(GameConfig::new((3, 3), 9).unwrap(), Some(1), true).unwrap();

        let text = play(&mut frontend, "r 1 1\nn 4 5 2\n");

        assert!(!frontend.session.is_game_over());
        assert_eq!(frontend.session.size(), (4, 5));
        assert_eq!(frontend.config.mines, 2);
        assert!(text.contains("\"game_over\":true"), "{text}");
    }

    #[test]
    fn frontend_refuses_unplayable_boards() {
        assert!(Frontend::new(GameConfig { size: (0, 4), mines: 2 }, Some(1), false).is_err());
        assert!(Frontend::new(GameConfig { size: (3, 3), mines: 10 }, None, false).is_err());
    }
}
