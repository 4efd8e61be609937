use serde::{Deserialize, Serialize};

use crate::error::TaskflowError;

pub const DEFAULT_COLOR: &str = "#6366f1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub color: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl CategoryPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.color.is_none()
    }

    pub fn apply(self, category: &mut Category) {
        if let Some(name) = self.name {
            category.name = name;
        }
        if let Some(color) = self.color {
            category.color = color;
        }
    }
}

pub fn validate_name(name: &str) -> Result<(), TaskflowError> {
    if name.trim().is_empty() {
        return Err(TaskflowError::validation("Category name must not be empty"));
    }
    Ok(())
}

/// `#rgb` or `#rrggbb`.
pub fn validate_color(color: &str) -> Result<(), TaskflowError> {
    let valid = color
        .strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()));
    if !valid {
        return Err(TaskflowError::validation(format!(
            "Invalid color '{color}'. Expected #rgb or #rrggbb"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_short_and_long_hex() {
        assert!(validate_color("#fff").is_ok());
        assert!(validate_color("#10B981").is_ok());
        assert!(validate_color(DEFAULT_COLOR).is_ok());
    }

    #[test]
    fn rejects_named_and_malformed_colors() {
        assert!(validate_color("red").is_err());
        assert!(validate_color("#12345").is_err());
        assert!(validate_color("#ggg").is_err());
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(validate_name("   ").is_err());
        assert!(validate_name("Work").is_ok());
    }
}
