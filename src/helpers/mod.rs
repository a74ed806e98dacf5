//! Small everyday helpers: strings, comparisons, randomness, JSON and styling.

mod compare;
mod json;
mod random;
#[cfg(feature = "styled")]
mod style;
mod text;
mod tree;

pub use compare::{contains_in_map, contains_in_slice, equals, not_equals};
pub use json::{marshal, unmarshal};
pub use random::random_string;
#[cfg(feature = "styled")]
pub use style::{Style, render_styled};
pub use text::{concat, contains_case_insensitive, to_bytes, to_str};
pub use tree::modify_by_value;

#[cfg(feature = "styled")]
pub use colored::Color;
