//! Todo title - validated at construction

use std::fmt;

use super::ValidationError;

/// Maximum title length in characters.
pub const MAX_TITLE_LEN: usize = 500;

/// A non-empty, trimmed todo title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTitle(String);

impl TodoTitle {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }

        if trimmed.chars().count() > MAX_TITLE_LEN {
            return Err(ValidationError::TooLong {
                field: "title",
                max: MAX_TITLE_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_title() {
        let title = TodoTitle::new("Buy milk").unwrap();
        assert_eq!(title.as_str(), "Buy milk");
    }

    #[test]
    fn trims_whitespace() {
        let title = TodoTitle::new("  Buy milk \n").unwrap();
        assert_eq!(title.as_str(), "Buy milk");
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            TodoTitle::new(""),
            Err(ValidationError::Empty { field: "title" })
        ));
        assert!(matches!(
            TodoTitle::new("   \t"),
            Err(ValidationError::Empty { .. })
        ));
    }

    #[test]
    fn rejects_too_long() {
        let long = "x".repeat(MAX_TITLE_LEN + 1);
        assert!(matches!(
            TodoTitle::new(&long),
            Err(ValidationError::TooLong { max: MAX_TITLE_LEN, .. })
        ));
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // 500 four-byte chars is still within the limit
        let emoji = "🚀".repeat(MAX_TITLE_LEN);
        assert!(TodoTitle::new(&emoji).is_ok());
    }
}
