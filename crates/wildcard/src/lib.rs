//! Whole-string wildcard matching with `*` and `?`.
//!
//! - `*` matches zero or more characters
//! - `?` matches exactly one UTF-8 character
//! - any other character matches itself, there is no escape syntax
//!
//! Matching is a single greedy pass that backtracks only to the most recent `*`.
//! It runs in constant extra space and without recursion, so long expressions with
//! many stars cannot exhaust the stack or blow up exponentially.
//!
//! # Examples
//!
//! ```
//! use wildcard::Pattern;
//!
//! let pattern = Pattern::new("*F*B*");
//! assert!(pattern.matches("FooBar"));
//! assert!(pattern.matches("FooBarBaz"));
//! assert!(!pattern.matches("BarFoo"));
//!
//! assert!(wildcard::matches("*u?*l*", "util"));
//! assert!(!wildcard::matches("*u?*l*", "ul"));
//! ```

mod pattern;
mod utf8;

pub use pattern::*;
