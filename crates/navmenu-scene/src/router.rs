//! Click routing for menu items.
//!
//! This module provides:
//! - The decision table that turns an activated item into a scroll, a route
//!   change or an external open, depending on the current route
//! - Collaborator traits for the host page's navigator, scroller and opener
//! - `CommandLog`, an in-memory collaborator that queues commands for a host
//!   loop (and for tests)
//!
//! Routing decisions are pure; side effects only happen through the
//! collaborators handed in with the `RouteContext`.

use std::collections::VecDeque;

use tracing::{info, warn};

use crate::error::{MenuError, Result};
use crate::model::{MenuChannel, MenuItem, Target, TargetMode};

/// Changes the current route. Must accept `/`-relative and `/#id` paths.
pub trait Navigator {
    fn navigate(&mut self, path: &str) -> anyhow::Result<()>;
}

/// Smooth-scrolls the current page to the element with the given id.
pub trait AnchorScroller {
    fn scroll_to_anchor(&mut self, anchor_id: &str, offset_px: f32) -> anyhow::Result<()>;
}

/// Opens a url in a new, non-opener, non-referrer browsing context.
pub trait ExternalOpener {
    fn open_external(&mut self, url: &str) -> anyhow::Result<()>;
}

/// Everything `ClickRouter::route` may call out to.
pub trait NavigationHost: Navigator + AnchorScroller + ExternalOpener {}

impl<T: Navigator + AnchorScroller + ExternalOpener> NavigationHost for T {}

/// Bundles three separate collaborators into one `NavigationHost`.
pub struct Collaborators<N, S, O> {
    pub navigator: N,
    pub scroller: S,
    pub opener: O,
}

impl<N: Navigator, S, O> Navigator for Collaborators<N, S, O> {
    fn navigate(&mut self, path: &str) -> anyhow::Result<()> {
        self.navigator.navigate(path)
    }
}

impl<N, S: AnchorScroller, O> AnchorScroller for Collaborators<N, S, O> {
    fn scroll_to_anchor(&mut self, anchor_id: &str, offset_px: f32) -> anyhow::Result<()> {
        self.scroller.scroll_to_anchor(anchor_id, offset_px)
    }
}

impl<N, S, O: ExternalOpener> ExternalOpener for Collaborators<N, S, O> {
    fn open_external(&mut self, url: &str) -> anyhow::Result<()> {
        self.opener.open_external(url)
    }
}

/// Per-activation routing context.
pub struct RouteContext<'a> {
    pub is_home_route: bool,
    pub host: &'a mut dyn NavigationHost,
}

impl<'a> RouteContext<'a> {
    pub fn new(is_home_route: bool, host: &'a mut dyn NavigationHost) -> Self {
        Self {
            is_home_route,
            host,
        }
    }
}

/// Browsing context an external link must be opened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowsingContext {
    pub new_context: bool,
    pub no_opener: bool,
    pub no_referrer: bool,
}

impl BrowsingContext {
    pub const ISOLATED: Self = Self {
        new_context: true,
        no_opener: true,
        no_referrer: true,
    };

    /// `rel` attribute equivalent.
    pub fn rel(&self) -> &'static str {
        match (self.no_opener, self.no_referrer) {
            (true, true) => "noopener noreferrer",
            (true, false) => "noopener",
            (false, true) => "noreferrer",
            (false, false) => "",
        }
    }
}

/// What activating an item resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteAction {
    ScrollToAnchor { anchor: String, offset_px: f32 },
    Navigate { path: String },
    OpenExternal { url: String, context: BrowsingContext },
    /// Label-only item.
    None,
}

impl RouteAction {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Strip the optional leading `#` from an in-page target.
pub fn anchor_id(url: &str) -> &str {
    let trimmed = url.trim();
    trimmed.strip_prefix('#').unwrap_or(trimmed)
}

/// Path that routes home and then resolves to `anchor`.
pub fn home_anchor_path(anchor: &str) -> String {
    format!("/#{}", anchor_id(anchor))
}

/// Stateless decision table shared by both presentations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickRouter {
    header_offset_px: f32,
}

impl Default for ClickRouter {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ClickRouter {
    /// `header_offset_px` is the fixed header height anchor scrolls must clear.
    pub fn new(header_offset_px: f32) -> Self {
        Self { header_offset_px }
    }

    pub fn header_offset_px(&self) -> f32 {
        self.header_offset_px
    }

    /// Decide, without side effects, what activating `target` means.
    ///
    /// First match wins:
    /// 1. `External` always opens externally, whatever the route.
    /// 2. `Route` navigates.
    /// 3. `InPage` on the home route scrolls to the anchor.
    /// 4. `InPage` elsewhere navigates to `/#anchor`.
    /// 5. No target: nothing.
    pub fn decide(&self, target: Option<Target<'_>>, is_home_route: bool) -> RouteAction {
        let Some(target) = target else {
            return RouteAction::None;
        };
        match target.mode {
            TargetMode::External => RouteAction::OpenExternal {
                url: target.url.to_string(),
                context: BrowsingContext::ISOLATED,
            },
            TargetMode::Route => RouteAction::Navigate {
                path: target.url.to_string(),
            },
            TargetMode::InPage if is_home_route => RouteAction::ScrollToAnchor {
                anchor: anchor_id(target.url).to_string(),
                offset_px: self.header_offset_px,
            },
            TargetMode::InPage => RouteAction::Navigate {
                path: home_anchor_path(target.url),
            },
        }
    }

    /// Route an activated item through the host's collaborators.
    ///
    /// Collaborator failures are returned to the caller, never swallowed.
    pub fn route(&self, item: &MenuItem, ctx: &mut RouteContext<'_>) -> Result<RouteAction> {
        let action = self.decide(item.target(), ctx.is_home_route);
        if action.is_none() {
            warn!(label = %item.label, "activated label-only menu item");
        }
        self.perform(&action, ctx)?;
        Ok(action)
    }

    /// Route a list-less channel's own target.
    pub fn route_channel(
        &self,
        channel: &MenuChannel,
        ctx: &mut RouteContext<'_>,
    ) -> Result<RouteAction> {
        let action = self.decide(channel.target(), ctx.is_home_route);
        self.perform(&action, ctx)?;
        Ok(action)
    }

    /// Execute an already-decided action.
    pub fn perform(&self, action: &RouteAction, ctx: &mut RouteContext<'_>) -> Result<()> {
        match action {
            RouteAction::OpenExternal { url, .. } => {
                info!(url = %url, "opening external link");
                ctx.host
                    .open_external(url)
                    .map_err(|source| MenuError::Collaborator {
                        action: "open_external",
                        source,
                    })
            }
            RouteAction::Navigate { path } => {
                info!(path = %path, "navigating");
                ctx.host
                    .navigate(path)
                    .map_err(|source| MenuError::Collaborator {
                        action: "navigate",
                        source,
                    })
            }
            RouteAction::ScrollToAnchor { anchor, offset_px } => {
                info!(anchor = %anchor, "scrolling to anchor");
                ctx.host
                    .scroll_to_anchor(anchor, *offset_px)
                    .map_err(|source| MenuError::Collaborator {
                        action: "scroll_to_anchor",
                        source,
                    })
            }
            RouteAction::None => Ok(()),
        }
    }
}

/// Commands queued by `CommandLog`.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationCommand {
    Navigate(String),
    ScrollToAnchor { anchor: String, offset_px: f32 },
    OpenExternal(String),
}

/// Collaborator that records every request for a host loop to consume.
#[derive(Debug, Default)]
pub struct CommandLog {
    queue: VecDeque<NavigationCommand>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pop_command(&mut self) -> Option<NavigationCommand> {
        self.queue.pop_front()
    }

    pub fn has_pending_commands(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn commands(&self) -> impl Iterator<Item = &NavigationCommand> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

impl Navigator for CommandLog {
    fn navigate(&mut self, path: &str) -> anyhow::Result<()> {
        self.queue
            .push_back(NavigationCommand::Navigate(path.to_string()));
        Ok(())
    }
}

impl AnchorScroller for CommandLog {
    fn scroll_to_anchor(&mut self, anchor_id: &str, offset_px: f32) -> anyhow::Result<()> {
        self.queue.push_back(NavigationCommand::ScrollToAnchor {
            anchor: anchor_id.to_string(),
            offset_px,
        });
        Ok(())
    }
}

impl ExternalOpener for CommandLog {
    fn open_external(&mut self, url: &str) -> anyhow::Result<()> {
        self.queue
            .push_back(NavigationCommand::OpenExternal(url.to_string()));
        Ok(())
    }
}
