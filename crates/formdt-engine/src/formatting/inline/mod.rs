//! # Inline Tokenizing
//!
//! Cursor-based scanning of a flattened paragraph into wrap tokens.
//!
//! ## Architecture
//!
//! Inline tokenizing runs over the logical text of a prose block after its
//! lines have been merged with single spaces. It only needs to know which
//! substrings are atomic; it does not build an inline tree.
//!
//! ## Modules
//!
//! - **`types`**: `Token` (Word, Protected) and `SpanKind`
//! - **`kinds`**: Span types with owned delimiters (Link, InlineMath)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`tokenizer`**: `tokenize()` entry point with `try_parse_*` helpers
//!
//! ## Precedence
//!
//! At any position a link/image is tried before inline math. The two cannot
//! start on the same byte, so the order only matters for nesting:
//! `[$$x$$](url)` is one link token.

pub mod cursor;
pub mod kinds;
pub mod tokenizer;
pub mod types;

pub use tokenizer::tokenize;
pub use types::{SpanKind, Token};
