//! Menu graph: channels → lists → items.
//!
//! The graph is built once at startup, validated, and never mutated. All
//! interactive state lives in the controllers that borrow it.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};

/// Render treatment of a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    #[default]
    Plain,
    ImageCard,
    /// Large illustrated panel; only valid as the sole or trailing list entry.
    ImageFlyoutPanel,
}

/// How activating a target is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetMode {
    /// Anchor on the home page.
    InPage,
    /// Another route of the site.
    Route,
    /// Off-site link, always opened in a new browsing context.
    External,
}

/// A resolved interactive target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target<'a> {
    pub mode: TargetMode,
    pub url: &'a str,
}

/// A leaf menu entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItem {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callout_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_text: Option<String>,
    pub kind: ItemKind,
    pub spans_all_columns: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_mode: Option<TargetMode>,
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: ItemKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_target(mut self, mode: TargetMode, url: impl Into<String>) -> Self {
        self.target_mode = Some(mode);
        self.target_url = Some(url.into());
        self
    }

    pub fn with_callout(mut self, text: impl Into<String>) -> Self {
        self.callout_text = Some(text.into());
        self
    }

    pub fn with_badge(mut self, text: impl Into<String>) -> Self {
        self.badge_text = Some(text.into());
        self
    }

    pub fn with_icon(mut self, icon_id: impl Into<String>) -> Self {
        self.icon_id = Some(icon_id.into());
        self
    }

    pub fn spanning_all_columns(mut self) -> Self {
        self.spans_all_columns = true;
        self
    }

    /// The item's target, or `None` when it is label-only.
    pub fn target(&self) -> Option<Target<'_>> {
        target_of(self.target_mode, self.target_url.as_deref())
    }

    pub fn is_interactive(&self) -> bool {
        self.target().is_some()
    }

    /// Column span hint, with flyout panels forced full-width on narrow layouts.
    pub fn effective_spans_all_columns(&self, narrow: bool) -> bool {
        self.spans_all_columns || (narrow && self.kind == ItemKind::ImageFlyoutPanel)
    }
}

/// A labeled group of items within a channel's panel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_badge: Option<String>,
    pub items: Vec<MenuItem>,
}

impl MenuList {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            group_label: None,
            group_badge: None,
            items,
        }
    }

    pub fn labeled(label: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            group_label: Some(label.into()),
            group_badge: None,
            items,
        }
    }
}

/// A top-level menu trigger.
///
/// A channel with no lists is a plain link/button: it never opens a panel,
/// and activating it routes its own target.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuChannel {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_text: Option<String>,
    pub lists: Vec<MenuList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_mode: Option<TargetMode>,
}

impl MenuChannel {
    pub fn new(id: impl Into<String>, label: impl Into<String>, lists: Vec<MenuList>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            lists,
            ..Self::default()
        }
    }

    pub fn with_target(mut self, mode: TargetMode, url: impl Into<String>) -> Self {
        self.target_mode = Some(mode);
        self.target_url = Some(url.into());
        self
    }

    pub fn with_badge(mut self, text: impl Into<String>) -> Self {
        self.badge_text = Some(text.into());
        self
    }

    pub fn has_panel(&self) -> bool {
        !self.lists.is_empty()
    }

    /// Target routed when a list-less channel's trigger is activated.
    pub fn target(&self) -> Option<Target<'_>> {
        target_of(self.target_mode, self.target_url.as_deref())
    }

    pub fn item_count(&self) -> usize {
        self.lists.iter().map(|l| l.items.len()).sum()
    }
}

/// Address of an item inside the graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemRef {
    pub channel_id: String,
    pub list: usize,
    pub item: usize,
}

impl ItemRef {
    pub fn new(channel_id: impl Into<String>, list: usize, item: usize) -> Self {
        Self {
            channel_id: channel_id.into(),
            list,
            item,
        }
    }
}

#[derive(Deserialize)]
struct MenuGraphFile {
    channels: Vec<MenuChannel>,
}

/// The validated, immutable menu graph.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuModel {
    channels: Vec<MenuChannel>,
}

impl MenuModel {
    /// Build the graph, failing fast on configuration defects.
    pub fn new(channels: Vec<MenuChannel>) -> Result<Self> {
        validate(&channels)?;
        tracing::debug!(channels = channels.len(), "menu graph loaded");
        Ok(Self { channels })
    }

    /// Parse `{ "channels": [...] }` JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: MenuGraphFile = serde_json::from_str(json)?;
        Self::new(file.channels)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    pub fn channels(&self) -> &[MenuChannel] {
        &self.channels
    }

    pub fn find_channel(&self, id: &str) -> Option<&MenuChannel> {
        self.channels.iter().find(|c| c.id == id)
    }

    pub fn item(&self, item_ref: &ItemRef) -> Option<&MenuItem> {
        self.find_channel(&item_ref.channel_id)?
            .lists
            .get(item_ref.list)?
            .items
            .get(item_ref.item)
    }
}

fn target_of(mode: Option<TargetMode>, url: Option<&str>) -> Option<Target<'_>> {
    match (mode, url) {
        (Some(mode), Some(url)) if !url.is_empty() => Some(Target { mode, url }),
        _ => None,
    }
}

fn validate(channels: &[MenuChannel]) -> Result<()> {
    let mut seen = HashSet::new();
    for (index, channel) in channels.iter().enumerate() {
        if channel.id.trim().is_empty() {
            return Err(MenuError::EmptyChannelId { index });
        }
        if !seen.insert(channel.id.as_str()) {
            return Err(MenuError::DuplicateChannelId(channel.id.clone()));
        }
        if channel.label.trim().is_empty() {
            return Err(MenuError::EmptyLabel(channel.id.clone()));
        }
        check_target(channel.target_mode, channel.target_url.as_deref(), || {
            channel.id.clone()
        })?;

        for (list_index, list) in channel.lists.iter().enumerate() {
            if list.items.is_empty() {
                return Err(MenuError::EmptyList {
                    channel: channel.id.clone(),
                    list: list_index,
                });
            }
            let last = list.items.len() - 1;
            for (item_index, item) in list.items.iter().enumerate() {
                let location = || format!("{}/{}/{}", channel.id, list_index, item_index);
                if item.label.trim().is_empty() {
                    return Err(MenuError::EmptyLabel(location()));
                }
                if item.kind == ItemKind::ImageFlyoutPanel && item_index != last {
                    return Err(MenuError::MisplacedFlyoutPanel {
                        channel: channel.id.clone(),
                        list: list_index,
                        item: item_index,
                    });
                }
                check_target(item.target_mode, item.target_url.as_deref(), location)?;
            }
        }
    }
    Ok(())
}

fn check_target(
    mode: Option<TargetMode>,
    url: Option<&str>,
    location: impl FnOnce() -> String,
) -> Result<()> {
    if mode.is_some() && url.is_none_or(|u| u.trim().is_empty()) {
        return Err(MenuError::MissingTargetUrl(location()));
    }
    Ok(())
}
