use crate::log::init_logger;
use crate::solver::{solve_puzzle, SolveStatus, SolverConfig, SolverError};
use crate::word_list::WordList;
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "E001", "S003")
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

impl From<SolverError> for WasmError {
    fn from(e: SolverError) -> Self {
        // a malformed puzzle reports the more specific PuzzleError underneath
        match &e {
            SolverError::MalformedPuzzle(pe) => WasmError {
                code: pe.code().to_string(),
                message: pe.to_string(),
                description: pe.description().to_string(),
                details: pe.details().to_string(),
                help: pe.help().map(ToString::to_string),
            },
            _ => WasmError {
                code: e.code().to_string(),
                message: e.to_string(),
                description: e.description().to_string(),
                details: e.details().to_string(),
                help: e.help().map(ToString::to_string),
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
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn internal_error(code: &str, what: &str, e: impl std::fmt::Display) -> WasmError {
    WasmError {
        code: code.to_string(),
        message: format!("serialization failed: {e}"),
        description: format!("Failed to serialize {what}"),
        details: format!("The {what} could not be converted to JavaScript format."),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
}

/// Initialize logging and the panic hook.
///
/// # Arguments
/// * `debug_enabled` - If true, use Debug log level; if false, use Info log level
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);

    log::info!("WASM module initialized");
    if !debug_enabled {
        log::info!("Debug logging disabled");
    }
}

#[derive(serde::Serialize)]
struct WasmSolveResult {
    solutions: Vec<Vec<String>>,
    status: String,
    playable_words: usize,
}

fn status_name(status: &SolveStatus) -> &'static str {
    match status {
        SolveStatus::FoundEnough => "found_enough",
        SolveStatus::Exhausted => "exhausted",
        SolveStatus::TimedOut { .. } => "timed_out",
    }
}

/// JS entry: (puzzle: string, words: string[], max_chain_length: number)
/// returns `{ solutions: string[][], status: string, playable_words: number }`
#[wasm_bindgen]
pub fn solve_puzzle_wasm(
    puzzle: &str,
    words: JsValue,
    max_chain_length: usize,
) -> Result<JsValue, JsValue> {
    let words: Vec<String> = serde_wasm_bindgen::from_value(words).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("words must be string[]: {e}"),
        description: "Invalid word-list format".to_string(),
        details: "The words parameter must be a JavaScript array of strings.".to_string(),
        help: Some("Pass a string array, e.g., ['pitchforks', 'sly']".to_string()),
    })?;
    let refs: Vec<&str> = words.iter().map(String::as_str).collect();

    let config = SolverConfig { max_chain_length, ..SolverConfig::default() };
    let result = solve_puzzle(puzzle, &refs, &config).map_err(WasmError::from)?;

    let wasm_result = WasmSolveResult {
        status: status_name(&result.status).to_string(),
        playable_words: result.stats.playable_words,
        solutions: result.solutions,
    };

    to_value(&wasm_result).map_err(|e| internal_error("WASM002", "solver result", e).into())
}

/// Parse a newline-separated word list (`word` or `word;score` per line) and return the
/// surviving words as a JavaScript string array.
///
/// # Errors
/// Returns a `JsValue` error if the words cannot be serialized.
#[wasm_bindgen]
pub fn parse_word_list(text: &str, min_score: i32) -> Result<JsValue, JsValue> {
    let word_list = WordList::parse_from_str(text, min_score);
    to_value(&word_list.entries).map_err(|e| internal_error("WASM003", "word list", e).into())
}

/// Generate a debug report users can paste into an issue.
#[wasm_bindgen]
pub fn get_debug_info(puzzle: &str, error_message: &str, word_list_size: usize, max_chain_length: usize) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // writing to a String is infallible
    let _ = writeln!(&mut report, "=== LETTERBOXED DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(
        &mut report,
        "Generated: {}",
        js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string())
    );
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{error_message}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Input");
    let _ = writeln!(&mut report, "Puzzle: {puzzle}");
    let _ = writeln!(&mut report, "Word List Size: {word_list_size}");
    let _ = writeln!(&mut report, "Max Chain Length: {max_chain_length}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {user_agent}");
        }
        let _ = writeln!(
            &mut report,
            "Location: {}",
            window.location().href().unwrap_or_else(|_| "unknown".to_string())
        );
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}
