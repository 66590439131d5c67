pub mod sides;

// Re-export the public API so call sites don't need the submodule path.
pub use sides::split_sides;
