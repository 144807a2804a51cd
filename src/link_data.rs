/// Data structures for the link list
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Session-local identity of a list item
///
/// Assigned on creation and again on every load; never written to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        ItemId(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One entry of the list, persisted as `{task, link, isChecked}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkItem {
    #[serde(skip)]
    pub id: ItemId,
    /// Display text, already HTML-escaped
    pub task: String,
    /// Empty for plain-text items
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub is_checked: bool,
}

impl LinkItem {
    pub fn new(task: String, link: String) -> LinkItem {
        LinkItem {
            id: ItemId::new(),
            task,
            link,
            is_checked: false,
        }
    }

    pub fn has_link(&self) -> bool {
        !self.link.is_empty()
    }
}

/// Context-menu capture forwarded by the background worker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturePayload {
    #[serde(default)]
    pub page_url: String,
    #[serde(default)]
    pub selection_text: Option<String>,
    #[serde(default)]
    pub link_url: Option<String>,
}

impl CapturePayload {
    /// Context-menu captures always carry the page they came from; other
    /// runtime messages do not
    pub fn is_capture(&self) -> bool {
        !self.page_url.trim().is_empty()
    }
}

/// Reply sent back to the capture sender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureAck {
    pub status: String,
}

impl CaptureAck {
    pub fn received() -> Self {
        CaptureAck {
            status: "Message received".to_string(),
        }
    }
}

/// Everything the renderer needs to redraw the panel
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSnapshot {
    pub items: Vec<LinkItem>,
    pub max_items: usize,
}
