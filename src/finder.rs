// std imports
use std::borrow::Cow;

// third-party imports
use wildcard::Pattern;

// local imports
use crate::{
    error::InvalidPatternError,
    name::{FullName, SEPARATOR},
};

// ---

/// A search pattern compiled into a pair of wildcard expressions, one per name part.
///
/// Built once per search and never mutated, so a single instance can be shared
/// between any number of concurrent matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    case_sensitive: bool,
    package: Pattern,
    class: Pattern,
}

impl CompiledPattern {
    /// Compiles a user-typed search pattern.
    ///
    /// A pattern with at least one ASCII upper-case letter is case-sensitive and its upper-case
    /// letters act as anchors that must appear in the given order, lower-case letters only narrow
    /// the match. A pattern without upper-case letters is case-insensitive and every character
    /// is an anchor.
    ///
    /// A literal `*` in the pattern stands for at least one arbitrary character at its position.
    /// A trailing space requires the part to end exactly where the pattern ends.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPatternError`] if the pattern is empty or a single space.
    ///
    /// # Examples
    ///
    /// ```
    /// use class_finder::CompiledPattern;
    ///
    /// let pattern = CompiledPattern::new("FBar ").unwrap();
    /// assert_eq!(pattern.class_wildcard().to_string(), "*F*Bar");
    /// assert!(pattern.matches("com.example.FooBar"));
    /// assert!(!pattern.matches("com.example.FooBarBaz"));
    /// ```
    pub fn new(raw: &str) -> Result<Self, InvalidPatternError> {
        if raw.is_empty() || raw == " " {
            return Err(InvalidPatternError { pattern: raw.into() });
        }

        let case_sensitive = raw.bytes().any(|b| b.is_ascii_uppercase());
        let name = FullName::new(raw);

        Ok(Self {
            case_sensitive,
            package: Pattern::new(to_wildcard(name.package(), case_sensitive)),
            class: Pattern::new(to_wildcard(name.class(), case_sensitive)),
        })
    }

    /// Returns true if the pattern contains upper-case letters and matching respects case.
    #[inline]
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Wildcard expression applied to the package part of candidate names.
    #[inline]
    pub fn package_wildcard(&self) -> &Pattern {
        &self.package
    }

    /// Wildcard expression applied to the class part of candidate names.
    #[inline]
    pub fn class_wildcard(&self) -> &Pattern {
        &self.class
    }

    /// Tests whether a fully-qualified name matches the pattern.
    ///
    /// Both the package part and the class part must match their wildcard expressions entirely.
    pub fn matches(&self, full: &str) -> bool {
        let full = if self.case_sensitive {
            Cow::Borrowed(full)
        } else {
            Cow::Owned(full.to_ascii_lowercase())
        };

        let name = FullName::new(&full);
        self.package.matches(name.package()) && self.class.matches(name.class())
    }
}

/// Compiles a user-typed search pattern, see [`CompiledPattern::new`].
///
/// # Errors
///
/// Returns [`InvalidPatternError`] if the pattern is empty or a single space.
pub fn compile(raw: &str) -> Result<CompiledPattern, InvalidPatternError> {
    CompiledPattern::new(raw)
}

// ---

fn to_wildcard(part: &str, case_sensitive: bool) -> String {
    let mut wc = String::with_capacity(part.len() * 3 + 1);

    for ch in part.chars() {
        if ch.is_ascii_uppercase() || ch == SEPARATOR || !case_sensitive {
            wc.push('*');
        }
        if wc.is_empty() {
            wc.push('*');
        }
        if ch == '*' {
            wc.push('?');
        }
        if ch != ' ' {
            wc.push(ch);
        }
    }

    if !part.ends_with(' ') {
        wc.push('*');
    }

    wc
}
