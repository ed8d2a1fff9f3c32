//! `PuzzleSession`: the single owned state object of one game.
//!
//! Renderers forward input events to the session and redraw from
//! [`PuzzleSession::view`]. Every handler runs synchronously, mutates the
//! session in place and returns the events it caused, so there is no ambient
//! state (drag flag, found words) outside this struct.
//!
//! # Examples
//!
//! ```
//! use instant::Instant;
//! use wordsearch::config::PuzzleConfig;
//! use wordsearch::session::PuzzleSession;
//! use wordsearch::vocabulary::Vocabulary;
//!
//! let mut session = PuzzleSession::new(PuzzleConfig::default(), Vocabulary::default(), Some(7))?;
//!
//! // drag across the first word
//! let cells = session.puzzle().placements[0].cells();
//! let now = Instant::now();
//! session.pointer_down(cells[0], now);
//! let mut events = Vec::new();
//! for &cell in &cells[1..] {
//!     events.extend(session.pointer_enter(cell, now));
//! }
//! session.pointer_up(now);
//!
//! assert_eq!(session.found().len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use instant::Instant;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::config::{InteractionMode, PuzzleConfig};
use crate::generator::{generate_with, GenerateError, Puzzle};
use crate::grid::{Cell, Grid};
use crate::selection::Selection;
use crate::validator::{validate, FoundWord, FoundWords, MatchOutcome};
use crate::vocabulary::Vocabulary;
use crate::win::{is_complete, GameState, WinBanner};

/// Board colour renderers use before any word is found.
pub const DEFAULT_ACCENT: &str = "#666";

/// Something the renderer may want to react to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SessionEvent {
    WordFound { word: String, cells: Vec<Cell> },
    Won,
    BannerDismissed,
    Restarted,
}

/// A target word as the renderer lists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordView {
    pub word: String,
    pub found: bool,
}

/// Everything a renderer needs to draw the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzleView {
    pub size: usize,
    /// One string of letters per row.
    pub rows: Vec<String>,
    pub words: Vec<WordView>,
    pub selection: Vec<Cell>,
    pub found: Vec<FoundWord>,
    pub state: GameState,
    pub accent: String,
    pub banner_visible: bool,
}

#[derive(Debug, Clone)]
pub struct PuzzleSession {
    config: PuzzleConfig,
    vocabulary: Vocabulary,
    rng: StdRng,
    puzzle: Puzzle,
    selection: Selection,
    dragging: bool,
    found: FoundWords,
    state: GameState,
    banner: WinBanner,
}

impl PuzzleSession {
    /// Start a session with a freshly generated puzzle.
    ///
    /// `seed` makes every puzzle of the session reproducible; `None` seeds from
    /// the OS.
    ///
    /// # Errors
    ///
    /// A `GenerateError` if the config or vocabulary cannot produce a puzzle.
    pub fn new(config: PuzzleConfig, vocabulary: Vocabulary, seed: Option<u64>) -> Result<Self, GenerateError> {
        config.validate()?;
        vocabulary.check_supports(&config)?;
        let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let puzzle = build_puzzle(&config, &vocabulary, &mut rng)?;
        Ok(Self::assemble(config, vocabulary, rng, puzzle))
    }

    /// Start a session on a puzzle built elsewhere (a fixture, a shared board).
    /// The config takes the puzzle's grid size, and restarting draws new
    /// puzzles of that size from `vocabulary` as usual.
    #[must_use]
    pub fn with_puzzle(mut config: PuzzleConfig, vocabulary: Vocabulary, puzzle: Puzzle, seed: u64) -> Self {
        config.size = puzzle.grid.size();
        Self::assemble(config, vocabulary, StdRng::seed_from_u64(seed), puzzle)
    }

    fn assemble(config: PuzzleConfig, vocabulary: Vocabulary, rng: StdRng, puzzle: Puzzle) -> Self {
        let banner = WinBanner::new(config.banner_duration());
        let mut session = PuzzleSession {
            config,
            vocabulary,
            rng,
            puzzle,
            selection: Selection::new(),
            dragging: false,
            found: FoundWords::default(),
            state: GameState::Setup,
            banner,
        };
        session.state = GameState::InProgress;
        info!("new puzzle: {:?}", session.puzzle.words);
        session
    }

    /// Throw the current puzzle away and start a new one.
    ///
    /// On error the current puzzle is kept as it was.
    ///
    /// # Errors
    ///
    /// A `GenerateError` if no new puzzle could be placed.
    pub fn restart(&mut self) -> Result<Vec<SessionEvent>, GenerateError> {
        let previous = self.state;
        self.state = GameState::Setup;
        let puzzle = match build_puzzle(&self.config, &self.vocabulary, &mut self.rng) {
            Ok(puzzle) => puzzle,
            Err(e) => {
                self.state = previous;
                return Err(e);
            }
        };

        self.puzzle = puzzle;
        self.selection.clear();
        self.dragging = false;
        self.found.clear();
        self.banner.cancel();
        self.state = GameState::InProgress;
        info!("restarted: {:?}", self.puzzle.words);
        Ok(vec![SessionEvent::Restarted])
    }

    fn accepts(&self, cell: Cell) -> bool {
        self.state == GameState::InProgress && self.puzzle.grid.contains(cell)
    }

    // Every input handler takes `now`, which stamps the win banner when that
    // input completes the puzzle.

    /// Press on `cell`: begins a drag gesture.
    pub fn pointer_down(&mut self, cell: Cell, now: Instant) -> Vec<SessionEvent> {
        if self.config.mode != InteractionMode::Drag || !self.accepts(cell) {
            return Vec::new();
        }
        self.dragging = true;
        self.selection.begin(cell);
        self.check_selection(now)
    }

    /// Pointer moved onto `cell`; only extends while a drag is in progress.
    pub fn pointer_enter(&mut self, cell: Cell, now: Instant) -> Vec<SessionEvent> {
        if !self.dragging || !self.accepts(cell) {
            return Vec::new();
        }
        if self.selection.extend(cell) {
            self.check_selection(now)
        } else {
            Vec::new()
        }
    }

    /// Touch moved onto `cell`. Touch has no hover, so this starts a gesture
    /// when none is active. Drag mode only, like [`Self::pointer_down`].
    pub fn touch_move(&mut self, cell: Cell, now: Instant) -> Vec<SessionEvent> {
        if self.config.mode != InteractionMode::Drag || !self.accepts(cell) {
            return Vec::new();
        }
        if self.dragging {
            return self.pointer_enter(cell, now);
        }
        self.dragging = true;
        self.selection.begin(cell);
        self.check_selection(now)
    }

    /// Release: the gesture ends and the selection is cleared, matched or not.
    pub fn pointer_up(&mut self, now: Instant) -> Vec<SessionEvent> {
        if !self.dragging {
            return Vec::new();
        }
        let events = self.check_selection(now);
        self.dragging = false;
        self.selection.clear();
        events
    }

    /// Click on `cell` (click mode). A click that would make the selection
    /// longer than any pending word starts a fresh selection there.
    pub fn click(&mut self, cell: Cell, now: Instant) -> Vec<SessionEvent> {
        if self.config.mode != InteractionMode::Click || !self.accepts(cell) || self.selection.contains(cell) {
            return Vec::new();
        }
        if self.selection.len() >= self.longest_pending() {
            self.selection.begin(cell);
        } else {
            self.selection.extend(cell);
        }
        self.check_selection(now)
    }

    /// Drop the current selection without ending the puzzle or a drag.
    pub fn cancel_selection(&mut self) {
        self.selection.clear();
    }

    /// Dismiss the win banner once its delay has passed.
    pub fn tick(&mut self, now: Instant) -> Vec<SessionEvent> {
        if self.banner.tick(now) {
            debug!("win banner dismissed");
            vec![SessionEvent::BannerDismissed]
        } else {
            Vec::new()
        }
    }

    fn longest_pending(&self) -> usize {
        self.puzzle
            .words
            .iter()
            .filter(|w| !self.found.contains(w))
            .map(String::len)
            .max()
            .unwrap_or(0)
    }

    fn check_selection(&mut self, now: Instant) -> Vec<SessionEvent> {
        let outcome = validate(
            self.selection.cells(),
            &self.puzzle.grid,
            &self.puzzle.words,
            &self.found,
            self.config.direction,
        );
        match outcome {
            MatchOutcome::Matched { word, cells } => self.apply_match(word, cells, now),
            MatchOutcome::Rejected(reason) => {
                debug!("selection {:?} rejected: {reason:?}", self.selection.cells());
                Vec::new()
            }
        }
    }

    fn apply_match(&mut self, word: String, cells: Vec<Cell>, now: Instant) -> Vec<SessionEvent> {
        self.selection.clear();
        if !self.found.insert(word.clone(), cells.clone()) {
            return Vec::new();
        }
        info!("found {word:?} ({}/{})", self.found.len(), self.puzzle.words.len());
        let mut events = vec![SessionEvent::WordFound { word, cells }];

        if is_complete(&self.found, &self.puzzle.words) {
            self.state = GameState::Won;
            self.dragging = false;
            self.banner.show(now);
            info!("puzzle won");
            events.push(SessionEvent::Won);
        }
        events
    }

    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.puzzle.grid
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.puzzle.words
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn found(&self) -> &FoundWords {
        &self.found
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The most recently found word, which renderers use as the board colour.
    #[must_use]
    pub fn accent(&self) -> Option<&str> {
        self.found.last().map(|f| f.word.as_str())
    }

    #[must_use]
    pub fn banner(&self) -> &WinBanner {
        &self.banner
    }

    #[must_use]
    pub fn view(&self, now: Instant) -> PuzzleView {
        PuzzleView {
            size: self.puzzle.grid.size(),
            rows: self.puzzle.grid.rows().map(|row| row.iter().collect()).collect(),
            words: self
                .puzzle
                .words
                .iter()
                .map(|w| WordView { word: w.clone(), found: self.found.contains(w) })
                .collect(),
            selection: self.selection.cells().to_vec(),
            found: self.found.iter().cloned().collect(),
            state: self.state,
            accent: self.accent().unwrap_or(DEFAULT_ACCENT).to_string(),
            banner_visible: self.banner.is_visible(now),
        }
    }
}

fn build_puzzle(config: &PuzzleConfig, vocabulary: &Vocabulary, rng: &mut StdRng) -> Result<Puzzle, GenerateError> {
    let words = vocabulary.choose(config, rng)?;
    generate_with(config, &words, rng)
}
