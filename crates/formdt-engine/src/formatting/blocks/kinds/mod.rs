//! # Block Kinds
//!
//! Line-level constructs, each owning its own syntax knowledge. The
//! classifier asks these types; it never hardcodes `#`, `>` or a fence.

pub mod admonition;
pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod math_fence;

pub use admonition::Admonition;
pub use block_quote::{BlockQuote, Callout};
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list_item::{ListItem, ListMarker};
pub use math_fence::MathFence;
