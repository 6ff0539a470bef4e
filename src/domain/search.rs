//! Case-insensitive substring search over name and category.

/// A non-blank search needle.
///
/// Matching is literal: `%`, `_` and `\` in the needle match themselves, so
/// [`SearchTerm::like_pattern`] escapes them before wrapping the needle in
/// wildcards. PostgreSQL uses `\` as the default `LIKE` escape character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    needle: String,
}

impl SearchTerm {
    /// Trim the raw query value. Blank or absent input means "no filter".
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let needle = raw?.trim();
        if needle.is_empty() {
            return None;
        }
        Some(Self {
            needle: needle.to_string(),
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// `ILIKE` pattern: the escaped needle wrapped in `%`.
    #[must_use]
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.needle.len() + 2);
        pattern.push('%');
        for ch in self.needle.chars() {
            if matches!(ch, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(ch);
        }
        pattern.push('%');
        pattern
    }

    /// In-process equivalent of `haystack ILIKE like_pattern()`.
    #[must_use]
    pub fn matches(&self, haystack: &str) -> bool {
        haystack
            .to_lowercase()
            .contains(&self.needle.to_lowercase())
    }
}
