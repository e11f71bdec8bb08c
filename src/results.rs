use serde::{Deserialize, Serialize};
use std::fmt;

/// Information extracted from a single store page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    /// Name of the game
    pub name: String,

    /// Developer names, in page order
    pub developers: Vec<String>,

    /// Publisher names, in page order
    pub publishers: Vec<String>,

    /// Popular user tags, in page order
    pub tags: Vec<String>,
}

impl GameInfo {
    /// Create a new game info instance
    pub fn new(
        name: String,
        developers: Vec<String>,
        publishers: Vec<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            name,
            developers,
            publishers,
            tags,
        }
    }

    /// Flattens the record into `[name, developers.., publishers.., tags..]`
    pub fn flatten(&self) -> Vec<String> {
        std::iter::once(&self.name)
            .chain(&self.developers)
            .chain(&self.publishers)
            .chain(&self.tags)
            .cloned()
            .collect()
    }
}

impl fmt::Display for GameInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flatten().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_flatten_keeps_field_order() {
        let info = GameInfo::new(
            "Foo".to_string(),
            strings(&["A", "B"]),
            strings(&["C"]),
            strings(&["Indie", "Action"]),
        );
        assert_eq!(info.flatten(), strings(&["Foo", "A", "B", "C", "Indie", "Action"]));
        assert_eq!(info.to_string(), "Foo, A, B, C, Indie, Action");
    }

    #[test]
    fn test_display_with_empty_runs() {
        let info = GameInfo::new("Solo".to_string(), Vec::new(), Vec::new(), Vec::new());
        assert_eq!(info.to_string(), "Solo");
    }
}
