//! Error types for the navigation menu.

use thiserror::Error;

/// Result type for menu operations.
pub type Result<T> = std::result::Result<T, MenuError>;

/// Errors surfaced by the menu subsystem.
///
/// Everything except `Collaborator` is a configuration defect detected while
/// the menu graph is built. Interaction-time misuse is never an error.
#[derive(Error, Debug)]
pub enum MenuError {
    /// A channel was declared without an id.
    #[error("channel #{index} has an empty id")]
    EmptyChannelId { index: usize },

    /// Two channels share an id.
    #[error("duplicate channel id: {0}")]
    DuplicateChannelId(String),

    /// A channel or item has no display text.
    #[error("empty label at {0}")]
    EmptyLabel(String),

    /// A list was declared without items.
    #[error("list {list} of channel {channel} has no items")]
    EmptyList { channel: String, list: usize },

    /// A flyout panel item is followed by other items in its list.
    #[error("flyout panel item {item} of {channel}/{list} must be the last entry of its list")]
    MisplacedFlyoutPanel {
        channel: String,
        list: usize,
        item: usize,
    },

    /// An interactive target was declared without a url.
    #[error("target at {0} has an empty url")]
    MissingTargetUrl(String),

    /// The menu graph could not be deserialized.
    #[error("failed to parse menu graph: {0}")]
    Parse(#[from] serde_json::Error),

    /// IO error while reading the menu graph.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An injected navigator, scroller or opener failed.
    #[error("{action} failed: {source}")]
    Collaborator {
        action: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl MenuError {
    /// Returns true for errors raised while validating the menu graph.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::Collaborator { .. })
    }
}
