//! Proof script re-indentation.
//!
//! This module contains the core formatting logic organized into submodules:
//! - [`normalize`]: Collapses interior spaces and trims each raw line
//! - [`comment`]: Tracks the nesting depth of `{* *}` / `(* *)` block comments
//! - [`keywords`]: Classifies a line's leading keyword into an [`Adjustment`]
//! - [`indenter`]: Ties the three together into a per-line state machine

pub mod comment;
pub mod indenter;
pub mod keywords;
pub mod normalize;

pub use comment::next_depth;
pub use indenter::{render_line, ThyIndenter};
pub use keywords::{classify, leading_keyword, Adjustment, KeywordRule, KEYWORD_RULES};
pub use normalize::{begin_position, normalize_line};
