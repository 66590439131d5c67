// Reusable library API: visible to both CLI and WASM builds
pub mod errors;
pub mod extractor;
pub mod graph;
pub mod letter;
pub mod log;
pub mod parser;
pub mod puzzle;
pub mod solver;
pub mod trie;
pub mod word_list;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
