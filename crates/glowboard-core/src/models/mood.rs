use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{CatalogItem, ItemId};

/// Kind of a mood-board post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodKind {
    #[default]
    Text,
    Image,
}

impl MoodKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
        }
    }
}

/// A post on the live mood board, as delivered by a feed snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: ItemId,
    #[serde(rename = "type", default)]
    pub kind: MoodKind,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub color: Option<String>,
    /// Milliseconds since the epoch; `None` while the server has not stamped
    /// the write yet.
    #[serde(default)]
    pub timestamp: Option<f64>,
}

impl MoodEntry {
    /// Uppercased first character of the author, for avatar badges.
    pub fn initial(&self) -> String {
        self.author
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

impl CatalogItem for MoodEntry {
    fn id(&self) -> ItemId {
        self.id.clone()
    }

    fn category(&self) -> &str {
        self.kind.as_str()
    }

    fn searchable_fields(&self) -> [&str; 2] {
        [&self.content, &self.author]
    }

    fn timestamp(&self) -> Option<f64> {
        self.timestamp
    }
}

/// Fields of a post about to be written to the live collection.
///
/// The id and timestamp are assigned upstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMoodEntry {
    #[serde(rename = "type")]
    pub kind: MoodKind,
    pub content: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl NewMoodEntry {
    pub fn text(content: &str, author: &str, color: &str) -> Self {
        Self {
            kind: MoodKind::Text,
            content: content.trim().to_string(),
            author: author.trim().to_string(),
            color: Some(color.to_string()),
        }
    }

    pub fn image(url: &str, author: &str) -> Self {
        Self {
            kind: MoodKind::Image,
            content: url.trim().to_string(),
            author: author.trim().to_string(),
            color: None,
        }
    }

    /// Both content and author are required before a post is sent.
    pub fn is_complete(&self) -> bool {
        !self.content.is_empty() && !self.author.is_empty()
    }

    /// JSON object handed to the write endpoint.
    pub fn to_fields(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
