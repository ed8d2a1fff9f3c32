use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use instant::Instant;

use wordsearch::config::{
    MatchDirection, PlacementStrategy, PuzzleConfig, DEFAULT_GRID_SIZE, DEFAULT_MAX_ATTEMPTS, DEFAULT_NUM_WORDS,
};
use wordsearch::generator::GenerateError;
use wordsearch::grid::Cell;
use wordsearch::session::{PuzzleSession, SessionEvent};
use wordsearch::vocabulary::Vocabulary;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Overlapping,
    DistinctRows,
}

impl From<StrategyArg> for PlacementStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Overlapping => PlacementStrategy::Overlapping,
            StrategyArg::DistinctRows => PlacementStrategy::DistinctRows,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DirectionArg {
    EitherWay,
    AsSelected,
}

impl From<DirectionArg> for MatchDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::EitherWay => MatchDirection::EitherWay,
            DirectionArg::AsSelected => MatchDirection::AsSelected,
        }
    }
}

/// Word-search puzzle generator and terminal player
#[derive(Parser, Debug)]
#[command(author, version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"), about, long_about = None)]
struct Cli {
    /// Grid size (the grid is square)
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,

    /// Number of words hidden per puzzle
    #[arg(short = 'n', long, default_value_t = DEFAULT_NUM_WORDS)]
    num_words: usize,

    /// Vocabulary file (one word per line); defaults to the built-in colour list
    #[arg(short = 'w', long)]
    vocabulary: Option<PathBuf>,

    /// Seed for reproducible puzzles
    #[arg(long)]
    seed: Option<u64>,

    /// Random placements tried per word before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// How words are laid out
    #[arg(long, value_enum, default_value_t = StrategyArg::Overlapping)]
    strategy: StrategyArg,

    /// Whether a selection read backwards also counts
    #[arg(long, value_enum, default_value_t = DirectionArg::EitherWay)]
    direction: DirectionArg,

    /// Print where each word was placed
    #[arg(long)]
    reveal: bool,

    /// Print the puzzle as JSON instead of a letter grid
    #[arg(long, conflicts_with = "play")]
    json: bool,

    /// Play in the terminal: enter selections as `row,col` pairs
    #[arg(long)]
    play: bool,
}

impl Cli {
    fn config(&self) -> PuzzleConfig {
        PuzzleConfig {
            size: self.size,
            num_words: self.num_words,
            max_attempts: self.max_attempts,
            strategy: self.strategy.into(),
            direction: self.direction.into(),
            ..PuzzleConfig::default()
        }
    }
}

/// Entry point of the wordsearch CLI.
///
/// Delegates to [`try_main`], printing any error before exiting with code 1.
fn main() -> ExitCode {
    wordsearch::log::init_logger(wordsearch::log::debug_requested());

    if let Err(e) = try_main() {
        if let Some(gen_err) = e.downcast_ref::<GenerateError>() {
            eprintln!("Error: {}", gen_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic.
///
/// 1. Parse CLI arguments.
/// 2. Load the vocabulary (file or built-in).
/// 3. Generate a puzzle.
/// 4. Print it (text or JSON), or hand over to the interactive loop.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let vocabulary = match &cli.vocabulary {
        Some(path) => Vocabulary::load_from_path(path)?,
        None => Vocabulary::default(),
    };
    log::debug!("vocabulary has {} words", vocabulary.words.len());

    let mut session = PuzzleSession::new(cli.config(), vocabulary, cli.seed)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&session.view(Instant::now()))?);
        return Ok(());
    }

    print_puzzle(&session, cli.reveal);
    if cli.play {
        play(&mut session, cli.reveal)?;
    }
    Ok(())
}

/// The grid with found letters in uppercase, everything else lowercase.
fn render_board(session: &PuzzleSession) -> String {
    let grid = session.grid();
    let mut out = String::new();
    for row in 0..grid.size() {
        let line: Vec<String> = (0..grid.size())
            .map(|col| {
                let cell = Cell::new(row, col);
                let letter = grid[cell];
                if session.found().covers(cell) {
                    letter.to_ascii_uppercase().to_string()
                } else {
                    letter.to_string()
                }
            })
            .collect();
        out.push_str(&format!("{row:>2} | {}\n", line.join(" ")));
    }
    out
}

fn print_puzzle(session: &PuzzleSession, reveal: bool) {
    let size = session.grid().size();
    let header: Vec<String> = (0..size).map(|c| (c % 10).to_string()).collect();
    println!("     {}", header.join(" "));
    print!("{}", render_board(session));
    println!();

    for word in session.words() {
        let mark = if session.found().contains(word) { "x" } else { " " };
        println!("[{mark}] {word}");
    }

    if reveal {
        println!();
        for placement in &session.puzzle().placements {
            println!("{}: {} {:?}", placement.word, placement.start, placement.direction);
        }
    }
}

/// Parse `1,0 1,1 1,2` into cells.
fn parse_cells(line: &str) -> Result<Vec<Cell>, String> {
    line.split_whitespace()
        .map(|token| {
            let (row, col) = token.split_once(',').ok_or_else(|| format!("expected row,col but got {token:?}"))?;
            let row = row.trim().parse().map_err(|e| format!("bad row in {token:?}: {e}"))?;
            let col = col.trim().parse().map_err(|e| format!("bad column in {token:?}: {e}"))?;
            Ok(Cell::new(row, col))
        })
        .collect()
}

/// One stdin line is one drag gesture.
fn play(session: &mut PuzzleSession, reveal: bool) -> io::Result<()> {
    println!();
    println!("Enter a selection as row,col pairs (e.g. `1,0 1,1 1,2`), `new` for a new puzzle, `quit` to exit.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        session.tick(Instant::now());

        match line.trim() {
            "" => continue,
            "quit" | "q" | "exit" => return Ok(()),
            "new" | "restart" => {
                match restart(session) {
                    Ok(()) => print_puzzle(session, reveal),
                    Err(msg) => eprintln!("{msg}"),
                }
                continue;
            }
            "show" => {
                print_puzzle(session, reveal);
                continue;
            }
            input => {
                let cells = match parse_cells(input) {
                    Ok(cells) => cells,
                    Err(msg) => {
                        eprintln!("{msg}");
                        continue;
                    }
                };
                let events = drag(session, &cells);
                report(session, &events);
            }
        }
    }
}

/// A failed restart keeps the current puzzle; the error is returned in its
/// detailed form so the loop can report it and carry on.
fn restart(session: &mut PuzzleSession) -> Result<(), String> {
    session.restart().map(drop).map_err(|e| format!("Error: {}", e.display_detailed()))
}

fn drag(session: &mut PuzzleSession, cells: &[Cell]) -> Vec<SessionEvent> {
    let now = Instant::now();
    let mut events = Vec::new();
    if let Some((first, rest)) = cells.split_first() {
        events.extend(session.pointer_down(*first, now));
        for &cell in rest {
            events.extend(session.pointer_enter(cell, now));
        }
        events.extend(session.pointer_up(now));
    }
    events
}

fn report(session: &PuzzleSession, events: &[SessionEvent]) {
    if events.is_empty() {
        println!("No word there.");
        return;
    }
    for event in events {
        match event {
            SessionEvent::WordFound { word, .. } => {
                println!("Found {word}! ({}/{})", session.found().len(), session.words().len());
            }
            SessionEvent::Won => {
                print!("{}", render_board(session));
                println!("You won! Type `new` for another puzzle.");
            }
            SessionEvent::BannerDismissed | SessionEvent::Restarted => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cells() {
        assert_eq!(parse_cells("1,0 1,1  1,2"), Ok(vec![Cell::new(1, 0), Cell::new(1, 1), Cell::new(1, 2)]));
        assert!(parse_cells("1;0").is_err());
        assert!(parse_cells("a,0").is_err());
        assert_eq!(parse_cells(""), Ok(vec![]));
    }

    #[test]
    fn test_cli_defaults_match_config_defaults() {
        let cli = Cli::parse_from(["wordsearch"]);
        assert_eq!(cli.config(), PuzzleConfig::default());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["wordsearch", "-s", "8", "-n", "2", "--strategy", "distinct-rows", "--direction", "as-selected"]);
        let config = cli.config();
        assert_eq!(config.size, 8);
        assert_eq!(config.num_words, 2);
        assert_eq!(config.strategy, PlacementStrategy::DistinctRows);
        assert_eq!(config.direction, MatchDirection::AsSelected);
    }

    #[test]
    fn test_failed_restart_reports_error_code() {
        let session = PuzzleSession::new(PuzzleConfig::default(), Vocabulary::default(), Some(2)).unwrap();
        let puzzle = session.puzzle().clone();
        let config = PuzzleConfig { num_words: 3, ..PuzzleConfig::default() };
        let mut session = PuzzleSession::with_puzzle(config, Vocabulary::parse_from_str("dog\n"), puzzle.clone(), 2);

        let msg = restart(&mut session).unwrap_err();
        assert!(msg.contains("G001"));
        assert!(msg.contains("C008"));
        assert_eq!(session.puzzle(), &puzzle);
    }

    #[test]
    fn test_drag_finds_placed_word() {
        let mut session = PuzzleSession::new(PuzzleConfig::default(), Vocabulary::default(), Some(21)).unwrap();
        let cells = session.puzzle().placements[0].cells();
        let events = drag(&mut session, &cells);
        assert!(matches!(events.first(), Some(SessionEvent::WordFound { .. })));
        assert!(render_board(&session).chars().any(|c| c.is_ascii_uppercase()));
    }
}
