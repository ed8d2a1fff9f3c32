use instant::Instant;
use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::config::PuzzleConfig;
use crate::generator::GenerateError;
use crate::grid::Cell;
use crate::log::init_logger;
use crate::session::{PuzzleSession, SessionEvent};
use crate::vocabulary::Vocabulary;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "C006", "G002")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<GenerateError> for WasmError {
    fn from(e: GenerateError) -> Self {
        // For InvalidConfig, surface the nested ConfigError, which carries the useful code
        match &e {
            GenerateError::InvalidConfig(ce) => WasmError {
                code: ce.code().to_string(),
                message: ce.to_string(),
                description: ce.description().to_string(),
                details: ce.details().to_string(),
                help: ce.help().map(str::to_string),
            },
            GenerateError::PlacementFailed { .. } => WasmError {
                code: e.code().to_string(),
                message: e.to_string(),
                description: e.description().to_string(),
                details: e.details().to_string(),
                help: e.help().map(str::to_string),
            },
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {}", help));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn serialization_error(e: serde_wasm_bindgen::Error) -> JsValue {
    WasmError {
        code: "WASM002".to_string(),
        message: format!("serialization failed: {e}"),
        description: "Failed to serialize result".to_string(),
        details: "The puzzle state could not be converted to JavaScript format.".to_string(),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
    .into()
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(serialization_error)
}

fn events_to_js(events: Vec<SessionEvent>) -> Result<JsValue, JsValue> {
    to_js(&events)
}

/// Initialize logging and the panic hook.
///
/// Call once from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

/// Options accepted by the `WordSearchGame` constructor. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GameOptions {
    #[serde(flatten)]
    config: PuzzleConfig,
    vocabulary: Option<Vec<String>>,
    seed: Option<u64>,
}

/// One puzzle session, driven by the page's event handlers.
#[wasm_bindgen]
pub struct WordSearchGame {
    session: PuzzleSession,
}

#[wasm_bindgen]
impl WordSearchGame {
    /// JS entry: `new WordSearchGame({ size?, num_words?, mode?, direction?, strategy?, vocabulary?, seed? })`
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<WordSearchGame, JsValue> {
        let options: GameOptions = if options.is_undefined() || options.is_null() {
            GameOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options).map_err(|e| WasmError {
                code: "WASM001".to_string(),
                message: format!("invalid game options: {e}"),
                description: "Invalid options object".to_string(),
                details: "The options must be an object whose fields match the puzzle configuration.".to_string(),
                help: Some("Example: new WordSearchGame({ size: 10, num_words: 3, mode: 'drag' })".to_string()),
            })?
        };

        let vocabulary = match options.vocabulary {
            Some(words) => Vocabulary::parse_from_str(&words.join("\n")),
            None => Vocabulary::default(),
        };

        let session = PuzzleSession::new(options.config, vocabulary, options.seed).map_err(WasmError::from)?;
        Ok(WordSearchGame { session })
    }

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, row: usize, col: usize) -> Result<JsValue, JsValue> {
        events_to_js(self.session.pointer_down(Cell::new(row, col), Instant::now()))
    }

    #[wasm_bindgen(js_name = pointerEnter)]
    pub fn pointer_enter(&mut self, row: usize, col: usize) -> Result<JsValue, JsValue> {
        events_to_js(self.session.pointer_enter(Cell::new(row, col), Instant::now()))
    }

    #[wasm_bindgen(js_name = touchMove)]
    pub fn touch_move(&mut self, row: usize, col: usize) -> Result<JsValue, JsValue> {
        events_to_js(self.session.touch_move(Cell::new(row, col), Instant::now()))
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) -> Result<JsValue, JsValue> {
        events_to_js(self.session.pointer_up(Instant::now()))
    }

    pub fn click(&mut self, row: usize, col: usize) -> Result<JsValue, JsValue> {
        events_to_js(self.session.click(Cell::new(row, col), Instant::now()))
    }

    #[wasm_bindgen(js_name = cancelSelection)]
    pub fn cancel_selection(&mut self) {
        self.session.cancel_selection();
    }

    pub fn restart(&mut self) -> Result<JsValue, JsValue> {
        let events = self.session.restart().map_err(WasmError::from)?;
        events_to_js(events)
    }

    /// Call from a timer (e.g. `requestAnimationFrame`) to dismiss the win banner.
    pub fn tick(&mut self) -> Result<JsValue, JsValue> {
        events_to_js(self.session.tick(Instant::now()))
    }

    /// The render snapshot as a plain JS object.
    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.view(Instant::now()))
    }
}

/// Parse a newline-separated vocabulary and return the surviving words.
#[wasm_bindgen(js_name = parseVocabulary)]
pub fn parse_vocabulary(text: &str) -> Result<JsValue, JsValue> {
    to_js(&Vocabulary::parse_from_str(text).words)
}

/// Generate a debug report for troubleshooting.
///
/// Users can copy/paste this when reporting an issue.
#[wasm_bindgen]
pub fn get_debug_info(error_message: &str, size: usize, num_words: usize, vocabulary_size: usize) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // NB: writing to a String never fails
    let _ = writeln!(&mut report, "=== WORDSEARCH DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"));
    let _ = writeln!(&mut report, "Generated: {}", js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string()));
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{}", error_message);
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Puzzle");
    let _ = writeln!(&mut report, "Grid Size: {}", size);
    let _ = writeln!(&mut report, "Words Requested: {}", num_words);
    let _ = writeln!(&mut report, "Vocabulary Size: {}", vocabulary_size);
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {}", user_agent);
        }
        let _ = writeln!(&mut report, "Location: {}", window.location().href().unwrap_or_else(|_| "unknown".to_string()));
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_arch = "wasm32")]
    fn test_get_debug_info_structure() {
        let report = get_debug_info("could not place \"turquoise\"", 5, 3, 9);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "=== WORDSEARCH DEBUG REPORT ===");
        assert!(lines[1].starts_with(&format!("Version: {}", env!("CARGO_PKG_VERSION"))));
        assert!(lines[2].starts_with("Generated: "));
        assert_eq!(lines[4], "## Error");
        assert_eq!(lines[5], "could not place \"turquoise\"");
        assert_eq!(lines[7], "## Puzzle");
        assert_eq!(lines[8], "Grid Size: 5");
        assert_eq!(lines[9], "Words Requested: 3");
        assert_eq!(lines[10], "Vocabulary Size: 9");
        assert_eq!(lines.last().copied(), Some("=== END DEBUG REPORT ==="));
    }

    #[test]
    #[cfg(target_arch = "wasm32")]
    fn test_wasm_error_unwraps_config_error() {
        let err = GenerateError::from(crate::errors::ConfigError::ZeroGridSize);
        let wasm_err = WasmError::from(err);
        assert_eq!(wasm_err.code, "C001");
        assert!(wasm_err.help.is_some());
    }
}
