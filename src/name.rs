// std imports
use std::{cmp::Ordering, fmt};

// third-party imports
use memchr::memrchr;

// ---

/// Separator between the package part and the class part of a full name.
pub const SEPARATOR: char = '.';

/// Splits a full name at the last [`SEPARATOR`] into the package part and the class part.
///
/// If there is no separator, the package part is empty and the whole input is the class part.
pub fn split(full: &str) -> (&str, &str) {
    match memrchr(SEPARATOR as u8, full.as_bytes()) {
        Some(pos) => (&full[..pos], &full[pos + 1..]),
        None => ("", full),
    }
}

// ---

/// A fully-qualified name viewed as its package part and class part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullName<'a> {
    package: &'a str,
    class: &'a str,
}

impl<'a> FullName<'a> {
    pub fn new(full: &'a str) -> Self {
        let (package, class) = split(full);
        Self { package, class }
    }

    #[inline]
    pub fn package(&self) -> &'a str {
        self.package
    }

    #[inline]
    pub fn class(&self) -> &'a str {
        self.class
    }

    /// Orders full names by class part alone, the package part is ignored.
    ///
    /// Names with equal class parts compare as equal, so a stable sort keeps them in input order.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.class.cmp(other.class)
    }
}

impl<'a> From<&'a str> for FullName<'a> {
    fn from(full: &'a str) -> Self {
        Self::new(full)
    }
}

impl fmt::Display for FullName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_empty() {
            f.write_str(self.class)
        } else {
            write!(f, "{}{}{}", self.package, SEPARATOR, self.class)
        }
    }
}
