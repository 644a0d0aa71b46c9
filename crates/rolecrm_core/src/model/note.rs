//! Personal note record and markdown preview derivation.
//!
//! # Invariants
//! - `preview_text` is always derived from `content`; callers never set it.
//! - Title must not be blank.

use crate::model::{now_epoch_ms, require_text, RecordId, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

const PREVIEW_MAX_CHARS: usize = 100;

static MARKDOWN_IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[[^\]]*]\([^)]*\)").expect("valid image regex"));
static MARKDOWN_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("valid link regex"));
static MARKDOWN_SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\*_`#>~\-\[\]\(\)!]+").expect("valid markdown symbol regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: RecordId,
    /// Owner of the note.
    pub user_id: RecordId,
    pub title: String,
    pub content: String,
    pub preview_text: Option<String>,
    #[serde(default)]
    pub pinned: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Note {
    pub fn new(
        id: RecordId,
        user_id: RecordId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let content = content.into();
        let now = now_epoch_ms();
        Self {
            id,
            user_id,
            title: title.into(),
            preview_text: derive_preview_text(&content),
            content,
            pinned: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)
    }
}

/// Shallow-merge patch for `Note`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub pinned: Option<bool>,
}

impl NotePatch {
    pub fn apply_to(self, note: &mut Note, at: i64) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(content) = self.content {
            note.preview_text = derive_preview_text(&content);
            note.content = content;
        }
        if let Some(pinned) = self.pinned {
            note.pinned = pinned;
        }
        note.updated_at = at;
    }
}

/// Strips markdown syntax and keeps the first 100 characters.
///
/// Images are dropped, links keep their label, whitespace is collapsed.
pub fn derive_preview_text(content: &str) -> Option<String> {
    let without_images = MARKDOWN_IMAGE_RE.replace_all(content, " ");
    let without_links = MARKDOWN_LINK_RE.replace_all(&without_images, "$1");
    let without_symbols = MARKDOWN_SYMBOL_RE.replace_all(&without_links, " ");
    let normalized = WHITESPACE_RE.replace_all(&without_symbols, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(PREVIEW_MAX_CHARS).collect())
    }
}
