//! # Block Segmentation
//!
//! Two-phase, line-oriented segmentation of a markdown document.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    from local facts only (fence delimiter, heading, list marker, quote
//!    markers, blank)
//!
//! 2. **Segmentation** (`segmenter`): a `Segmenter` state machine walks the
//!    classified lines and emits `Block`s: verbatim runs, list items, and
//!    prose paragraphs
//!
//! ## Modules
//!
//! - **`types`**: `Block`, `VerbatimKind`, and block rendering
//! - **`kinds`**: Line constructs with owned delimiters (CodeFence, MathFence,
//!   Heading, ListItem, Admonition, BlockQuote)
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineClass` per line
//! - **`segmenter`**: `Segmenter` and the `segment` convenience entry point
//!
//! ## Key Invariants
//!
//! - Blocks come out in input order and cover every input line exactly once
//! - Fenced code and display math are raw zones: no classification inside
//! - A list item is always exactly one input line
//! - An admonition marker line is never merged with its neighbours when it
//!   opens a block

pub mod classify;
pub mod kinds;
pub mod segmenter;
pub mod types;

pub use classify::{LineClass, MarkdownLineClassifier};
pub use segmenter::{Segmenter, segment};
pub use types::{Block, VerbatimKind};
