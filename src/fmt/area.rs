//! Bounded area name shown between the level and the colon.

use std::fmt;

/// Storage capacity including the terminator slot, so at most 31 characters are kept.
pub const AREA_NAME_CAPACITY: usize = 32;

/// Names longer than the capacity are cut silently; the empty name means "no area".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AreaName(String);

impl AreaName {
    /// The name ends at the first NUL, like a C string.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if the kept part contains a line break, which
    /// would tear the line apart.
    pub fn new(name: &str) -> Result<Self, crate::Error> {
        let name = name.split('\0').next().unwrap_or_default();
        if let Some(c) = name.chars().find(|c| matches!(c, '\n' | '\r')) {
            return Err(crate::Error::InvalidArgument(format!(
                "area name contains {c:?}"
            )));
        }
        Ok(Self(
            name.chars().take(AREA_NAME_CAPACITY - 1).collect(),
        ))
    }

    /// Characters kept, at most `AREA_NAME_CAPACITY - 1`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Stored text, already truncated.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The empty name leaves the area out of the prefix.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AreaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_by_characters() {
        let long = "ä".repeat(40);
        let area = AreaName::new(&long).unwrap();
        assert_eq!(area.as_str().chars().count(), AREA_NAME_CAPACITY - 1);
    }

    #[test]
    fn rejects_line_breaks() {
        assert!(AreaName::new("a\nb").is_err());
        assert!(AreaName::new("a\rb").is_err());
    }

    #[test]
    fn stops_at_nul() {
        assert_eq!(AreaName::new("net\0ignored").unwrap().as_str(), "net");
        assert_eq!(AreaName::new("net\0\nignored").unwrap().as_str(), "net");
        assert!(AreaName::new("\0net").unwrap().is_empty());
        assert_eq!(AreaName::new("net").unwrap().len(), 3);
    }
}
