//! Finds fully-qualified class names by camelCase abbreviation.
//!
//! A search pattern such as `FBar` is compiled into a pair of wildcard expressions,
//! one for the package part and one for the class part of a name, and every candidate
//! name is matched against both.
//!
//! ```
//! use class_finder::compile;
//!
//! let pattern = compile("FoBa").unwrap();
//! assert!(pattern.matches("a.b.FooBarBaz"));
//! assert!(!pattern.matches("a.b.BarFoo"));
//! ```

// public modules
pub mod app;
pub mod cli;
pub mod error;
pub mod finder;
pub mod input;
pub mod name;
pub mod settings;

// public uses
pub use app::{App, Options};
pub use finder::{CompiledPattern, compile};
pub use name::FullName;
pub use settings::Settings;
