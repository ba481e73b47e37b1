use std::fmt;

use crate::utf8::utf8_char_width;

/// A compiled wildcard expression for whole-string matching.
///
/// Expressions are built from strings over three kinds of characters:
/// - `*` matches zero or more characters
/// - `?` matches exactly one UTF-8 character
/// - any other character matches itself
///
/// There is no escape syntax, `*` and `?` are always wildcards.
///
/// # Examples
///
/// ```
/// use wildcard::Pattern;
///
/// let pattern = Pattern::new("*F*Bar*");
/// assert!(pattern.matches("FooBarBaz"));
/// assert!(!pattern.matches("BarFoo"));
///
/// let pattern = Pattern::new("B?*r");
/// assert!(pattern.matches("Bar"));
/// assert!(!pattern.matches("Br"));
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Pattern {
    tokens: Vec<Token>,
}

impl Pattern {
    /// Creates a new pattern from an expression string.
    ///
    /// This function is infallible, every string is a valid expression.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// let pattern = Pattern::new("*?**");
    /// assert_eq!(pattern.to_string(), "*?**");
    /// assert!(pattern.matches("x"));
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self::compile(raw.as_ref())
    }

    /// Tests whether the pattern matches the entire text.
    ///
    /// The scan is iterative and keeps a single backtracking checkpoint at the most recent `*`,
    /// so it uses constant extra space and never recurses.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// assert!(Pattern::new("*").matches("anything"));
    /// assert!(Pattern::new("").matches(""));
    /// assert!(!Pattern::new("").matches("x"));
    ///
    /// // `?` consumes a whole character, not a byte
    /// assert!(Pattern::new("??").matches("🦀🎉"));
    /// ```
    pub fn matches(&self, text: &str) -> bool {
        let tokens = self.tokens.as_slice();
        let mut e = 0;
        let mut t = 0;
        // (token index of the last `*`, text offset it currently starts consuming from)
        let mut star: Option<(usize, usize)> = None;

        while let Some(ch) = text[t..].chars().next() {
            match tokens.get(e) {
                Some(Token::Any) => {
                    e += 1;
                    t += ch.len_utf8();
                }
                Some(&Token::Char(expected)) if expected == ch => {
                    e += 1;
                    t += ch.len_utf8();
                }
                Some(Token::Many) => {
                    star = Some((e, t));
                    e += 1;
                }
                _ => {
                    let Some((at, from)) = star else {
                        return false;
                    };
                    let from = from + utf8_char_width(text.as_bytes()[from]);
                    star = Some((at, from));
                    e = at + 1;
                    t = from;
                }
            }
        }

        while tokens.get(e) == Some(&Token::Many) {
            e += 1;
        }

        e == tokens.len()
    }

    fn compile(raw: &str) -> Self {
        let tokens = raw
            .chars()
            .map(|ch| match ch {
                '*' => Token::Many,
                '?' => Token::Any,
                _ => Token::Char(ch),
            })
            .collect();

        Self { tokens }
    }
}

impl From<&str> for Pattern {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            match token {
                Token::Char(ch) => write!(f, "{}", ch)?,
                Token::Any => write!(f, "?")?,
                Token::Many => write!(f, "*")?,
            }
        }
        Ok(())
    }
}

/// Tests whether the expression `expr` matches the entire `text`.
///
/// Shorthand for `Pattern::new(expr).matches(text)`, prefer keeping a [`Pattern`]
/// when the same expression is matched repeatedly.
pub fn matches(expr: &str, text: &str) -> bool {
    Pattern::new(expr).matches(text)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Token {
    Char(char),
    Any,
    Many,
}
