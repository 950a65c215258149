//! # Inline Kinds
//!
//! Protected-span types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Link`**: `IMAGE = b'!'`, `TEXT_OPEN = b'['`, `TEXT_CLOSE = b']'`,
//!   `URL_OPEN = b'('`, `URL_CLOSE = b')'`
//! - **`InlineMath`**: `DELIMITER = b"$$"`, `DOLLAR = b'$'`
//!
//! The tokenizer calls these constants; it never hardcodes `[` or `$$`.

pub mod inline_math;
pub mod link;

pub use inline_math::InlineMath;
pub use link::Link;
