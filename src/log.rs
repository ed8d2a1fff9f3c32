//! Logger setup shared by the CLI and the browser build.

#[cfg(not(target_arch = "wasm32"))]
use log::LevelFilter;

/// Environment variable that turns on debug logging in the CLI.
pub const DEBUG_ENV_VAR: &str = "WORDSEARCH_DEBUG";

/// Initialize logging for the puzzle engine.
///
/// Safe to call more than once: later calls log a warning and keep the
/// logger that is already installed.
///
/// # Behavior
/// - **Native (CLI):** `Debug` when `debug_enabled`, else `Info`; `RUST_LOG` overrides both.
/// - **WASM:** logs to the browser console at the same levels.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_enabled { log::Level::Debug } else { log::Level::Info };

        if let Err(e) = console_log::init_with_level(level) {
            // the console is the only place left to complain to
            let msg = format!("wordsearch: console logger unavailable: {e}");
            web_sys::console::warn_1(&msg.into());
            return;
        }
        log::info!("console logger initialized at {level:?} level");
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let level = if debug_enabled { LevelFilter::Debug } else { LevelFilter::Info };

        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        if let Ok(spec) = std::env::var("RUST_LOG") {
            builder.parse_filters(&spec);
        }

        match builder.try_init() {
            Ok(()) => log::debug!("logger initialized at {level:?} level"),
            Err(e) => log::warn!("logger already initialized: {e}"),
        }
    }
}

/// Whether the debug environment variable is set.
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn debug_requested() -> bool {
    std::env::var_os(DEBUG_ENV_VAR).is_some()
}
