//! Text matching rules shared by message and user queries.
//!
//! Two match modes are supported:
//!
//! | Mode | Method | Description |
//! |------|--------|-------------|
//! | Exact | [`TextMatch::exact`] | Whole value equals the needle |
//! | Contains | [`TextMatch::contains`] | Needle occurs anywhere in the value |
//!
//! Both fold case unless built with [`case_sensitive`](TextMatch::case_sensitive).
//!
//! # Examples
//!
//! ```
//! use dhtparse::core::filter::TextMatch;
//!
//! let m = TextMatch::contains("HELLO");
//! assert!(m.matches("say hello now"));
//!
//! let m = TextMatch::exact("hi").case_sensitive(true);
//! assert!(m.matches("hi"));
//! assert!(!m.matches("Hi"));
//! ```
//!
//! # Behavior Notes
//!
//! - Case folding uses Unicode lowercase, not ASCII-only folding
//! - An empty needle in case-sensitive `Contains` mode matches nothing
//! - An empty needle in case-insensitive `Contains` mode matches everything

/// How a needle is compared against a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Value must equal the needle.
    Exact,
    /// Value must contain the needle.
    Contains,
}

/// A prepared text predicate.
///
/// The needle is folded once at construction so repeated matching over a
/// collection only folds each value.
#[derive(Debug, Clone)]
pub struct TextMatch {
    needle: String,
    folded: String,
    mode: MatchMode,
    case_sensitive: bool,
}

impl TextMatch {
    /// Creates a case-insensitive predicate with the given mode.
    pub fn new(needle: impl Into<String>, mode: MatchMode) -> Self {
        let needle = needle.into();
        Self {
            folded: needle.to_lowercase(),
            needle,
            mode,
            case_sensitive: false,
        }
    }

    /// Creates a case-insensitive exact-match predicate.
    pub fn exact(needle: impl Into<String>) -> Self {
        Self::new(needle, MatchMode::Exact)
    }

    /// Creates a case-insensitive substring predicate.
    pub fn contains(needle: impl Into<String>) -> Self {
        Self::new(needle, MatchMode::Contains)
    }

    /// Creates an exact or substring predicate from the `strict` flag used
    /// by user lookups.
    pub fn from_strict(needle: impl Into<String>, strict: bool) -> Self {
        let mode = if strict {
            MatchMode::Exact
        } else {
            MatchMode::Contains
        };
        Self::new(needle, mode)
    }

    /// Sets case sensitivity.
    #[must_use]
    pub fn case_sensitive(self, enabled: bool) -> Self {
        Self {
            case_sensitive: enabled,
            ..self
        }
    }

    /// Returns the match mode.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Returns `true` if `value` satisfies the predicate.
    pub fn matches(&self, value: &str) -> bool {
        if self.case_sensitive {
            match self.mode {
                MatchMode::Exact => value == self.needle,
                MatchMode::Contains => !self.needle.is_empty() && value.contains(&self.needle),
            }
        } else {
            let folded = value.to_lowercase();
            match self.mode {
                MatchMode::Exact => folded == self.folded,
                MatchMode::Contains => folded.contains(&self.folded),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_folds_case() {
        assert!(TextMatch::contains("HELLO").matches("say hello now"));
        assert!(!TextMatch::contains("xyz").matches("say hello now"));
    }

    #[test]
    fn test_contains_case_sensitive() {
        let m = TextMatch::contains("Hello").case_sensitive(true);
        assert!(m.matches("Hello world"));
        assert!(!m.matches("hello world"));
        assert!(!m.matches("nothing here"));
    }

    #[test]
    fn test_empty_needle() {
        assert!(TextMatch::contains("").matches("anything"));
        assert!(TextMatch::contains("").matches(""));
        assert!(!TextMatch::contains("").case_sensitive(true).matches("anything"));
    }

    #[test]
    fn test_exact() {
        let m = TextMatch::exact("hi").case_sensitive(true);
        assert!(m.matches("hi"));
        assert!(!m.matches("Hi"));
        assert!(!m.matches("hi there"));

        let m = TextMatch::exact("hi");
        assert!(m.matches("HI"));
        assert!(!m.matches("hi there"));
    }

    #[test]
    fn test_unicode_folding() {
        assert!(TextMatch::exact("привет").matches("ПРИВЕТ"));
        assert!(TextMatch::contains("ÉCOLE").matches("à l'école"));
    }

    #[test]
    fn test_from_strict() {
        assert_eq!(TextMatch::from_strict("a", true).mode(), MatchMode::Exact);
        assert_eq!(TextMatch::from_strict("a", false).mode(), MatchMode::Contains);
    }
}
