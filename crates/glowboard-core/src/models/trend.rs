use serde::{Deserialize, Serialize};

use super::{CatalogItem, ItemId};

/// Category given to trends whose source does not classify them.
pub const UNCATEGORIZED: &str = "trend";

fn default_category() -> String {
    UNCATEGORIZED.to_string()
}

/// A fashion trend.
///
/// The backend names the title field `name`; older static data used `title`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub id: ItemId,
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub popularity: Option<String>,
    #[serde(default = "default_category")]
    pub category: String,
    /// Emoji shown on the trend card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl CatalogItem for Trend {
    fn id(&self) -> ItemId {
        self.id.clone()
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn searchable_fields(&self) -> [&str; 2] {
        [&self.name, &self.description]
    }
}
