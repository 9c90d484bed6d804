use taskboard_core::{BoardError, BoardResult};

/// Maximum number of tags a card may carry.
pub const MAX_TAGS: usize = 2;

pub fn validate_tags(tags: &[String]) -> BoardResult<()> {
    if tags.len() > MAX_TAGS {
        return Err(BoardError::Validation(format!(
            "a card may have at most {} tags, got {}",
            MAX_TAGS,
            tags.len()
        )));
    }
    Ok(())
}

/// Ordered tag picker state for a card form.
///
/// Selection order is preserved and the cap is enforced here so a view can
/// refuse a third tag before an intent ever reaches the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSelection {
    tags: Vec<String>,
}

impl TagSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tags(tags: &[String]) -> Self {
        Self {
            tags: tags.iter().take(MAX_TAGS).cloned().collect(),
        }
    }

    /// Select or deselect `tag`. Returns false when selecting would exceed
    /// the cap, leaving the selection unchanged.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
            return true;
        }
        if self.is_full() {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_full(&self) -> bool {
        self.tags.len() >= MAX_TAGS
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn into_tags(self) -> Vec<String> {
        self.tags
    }
}
