use serde::{Deserialize, Serialize};

/// Archived deliverable selected for the inline drill-down view.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArchiveItem {
    pub id: String,
    pub title: String,
    pub category: String,
    pub date: String,
    #[serde(default)]
    pub summary: String,
}
