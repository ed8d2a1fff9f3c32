// Reusable library API, shared by the CLI and WASM builds
pub mod config;
pub mod errors;
pub mod generator;
pub mod grid;
pub mod letter;
pub mod log;
pub mod selection;
pub mod session;
pub mod validator;
pub mod vocabulary;
pub mod win;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
