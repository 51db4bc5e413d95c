/// Domain entities for tags
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A question tag.
///
/// Identity is the name, not the surrogate id: two tags with the same name
/// are the same tag whether or not either has been persisted yet. Set-based
/// deduplication therefore keys on name alone, mirroring the unique
/// constraint on tag.name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: Option<i64>,
    pub name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Tag with its associated-question count, as returned by the
/// most-popular listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularTag {
    pub id: i64,
    pub name: String,
    pub question_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn hash_of(tag: &Tag) -> u64 {
        let mut hasher = DefaultHasher::new();
        tag.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equality_ignores_surrogate_id() {
        let persisted = Tag {
            id: Some(7),
            name: "java".to_string(),
        };
        let fresh = Tag::new("java");

        assert_eq!(persisted, fresh);
        assert_eq!(hash_of(&persisted), hash_of(&fresh));
    }

    #[test]
    fn different_names_are_never_equal() {
        let a = Tag {
            id: Some(1),
            name: "java".to_string(),
        };
        let b = Tag {
            id: Some(1),
            name: "spring".to_string(),
        };
        assert_ne!(a, b);
    }

    #[test]
    fn sets_deduplicate_by_name() {
        let mut tags = HashSet::new();
        tags.insert(Tag::new("rust"));
        tags.insert(Tag {
            id: Some(42),
            name: "rust".to_string(),
        });
        tags.insert(Tag::new("diesel"));

        assert_eq!(tags.len(), 2);
    }
}
