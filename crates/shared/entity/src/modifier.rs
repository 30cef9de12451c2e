use std::fmt;

/// Value of a modifier: a literal string or the boolean `true` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModValue {
    Value(String),
    /// Boolean modifier: present without a value.
    Boolean,
}

impl ModValue {
    /// Returns the literal value, or `None` for a boolean modifier.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Value(v) => Some(v),
            Self::Boolean => None,
        }
    }

    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean)
    }

    /// Maps a literal value through `f`, leaving the boolean sentinel untouched.
    #[must_use]
    pub fn map_value(&self, f: impl FnOnce(&str) -> String) -> Self {
        match self {
            Self::Value(v) => Self::Value(f(v)),
            Self::Boolean => Self::Boolean,
        }
    }
}

impl From<&str> for ModValue {
    fn from(value: &str) -> Self {
        Self::Value(value.to_owned())
    }
}

impl From<String> for ModValue {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl fmt::Display for ModValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.write_str(v),
            Self::Boolean => f.write_str("true"),
        }
    }
}

/// A validated modifier of a block or element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Modifier {
    pub(crate) name: String,
    pub(crate) val: ModValue,
}

impl Modifier {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn val(&self) -> &ModValue {
        &self.val
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_value_skips_boolean_sentinel() {
        let upper = |v: &str| v.to_uppercase();

        assert_eq!(ModValue::from("dark").map_value(upper), ModValue::Value("DARK".to_owned()));
        assert_eq!(ModValue::Boolean.map_value(upper), ModValue::Boolean);
    }

    #[test]
    fn boolean_has_no_literal() {
        assert!(ModValue::Boolean.is_boolean());
        assert_eq!(ModValue::Boolean.as_str(), None);
        assert_eq!(ModValue::from("l").as_str(), Some("l"));
    }
}
