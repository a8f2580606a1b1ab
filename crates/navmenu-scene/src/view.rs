//! Render snapshots.
//!
//! Renderers never read controller internals. Each frame they ask for a
//! `DesktopFrame` or a `SheetFrame`, plain data computed from the current
//! controller state and the shared model, and draw exactly that.

use crate::hover::HoverIntentController;
use crate::model::{ItemKind, ItemRef, MenuChannel, MenuItem, MenuList};
use crate::sheet::{GestureSheetController, SheetPhase};
use crate::view_stack::SheetView;

/// How an item is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemTreatment {
    /// Text row with optional icon, callout and badge.
    Row,
    /// Image card sharing a row with its neighbours.
    ImageCard,
    /// Large trailing image panel.
    FlyoutPanel,
}

impl From<ItemKind> for ItemTreatment {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Plain => Self::Row,
            ItemKind::ImageCard => Self::ImageCard,
            ItemKind::ImageFlyoutPanel => Self::FlyoutPanel,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemView {
    pub item_ref: ItemRef,
    pub label: String,
    pub callout_text: Option<String>,
    pub icon_id: Option<String>,
    pub badge_text: Option<String>,
    pub treatment: ItemTreatment,
    pub spans_all_columns: bool,
    /// False for label-only items.
    pub interactive: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub group_label: Option<String>,
    pub group_badge: Option<String>,
    pub items: Vec<ItemView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TriggerView {
    pub channel_id: String,
    pub label: String,
    pub badge_text: Option<String>,
    /// Whether activating the trigger opens a panel or routes directly.
    pub has_panel: bool,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub channel_id: String,
    pub lists: Vec<ListView>,
}

/// Wide layout: trigger strip plus at most one open flyout.
#[derive(Debug, Clone, PartialEq)]
pub struct DesktopFrame {
    pub triggers: Vec<TriggerView>,
    pub panel: Option<PanelView>,
}

impl DesktopFrame {
    pub fn build(hover: &HoverIntentController) -> Self {
        let active = hover.active_channel_id();
        let triggers = hover
            .model()
            .channels()
            .iter()
            .map(|channel| trigger_view(channel, active == Some(channel.id.as_str())))
            .collect();
        let panel = hover
            .is_open()
            .then(|| hover.open_channel())
            .flatten()
            .map(|channel| PanelView {
                channel_id: channel.id.clone(),
                lists: list_views(channel, false),
            });
        Self { triggers, panel }
    }
}

/// What the sheet body shows.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetContent {
    Channels(Vec<TriggerView>),
    Lists(Vec<ListView>),
}

/// Narrow layout: the bottom sheet, present only while it is visible.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetFrame {
    pub phase: SheetPhase,
    /// Distance below the resting position, px.
    pub offset: f32,
    pub height: f32,
    pub backdrop_opacity: f32,
    pub show_back: bool,
    /// Channel label on a submenu; `None` on the main view.
    pub title: Option<String>,
    pub content: SheetContent,
}

impl SheetFrame {
    pub fn build(sheet: &GestureSheetController) -> Option<Self> {
        if !sheet.phase().is_visible() {
            return None;
        }
        let (title, content) = match (sheet.current_view(), sheet.current_channel()) {
            (Some(SheetView::Submenu), Some(channel)) => (
                Some(channel.label.clone()),
                SheetContent::Lists(list_views(channel, true)),
            ),
            _ => (
                None,
                SheetContent::Channels(
                    sheet
                        .model()
                        .channels()
                        .iter()
                        .map(|channel| trigger_view(channel, false))
                        .collect(),
                ),
            ),
        };
        Some(Self {
            phase: sheet.phase(),
            offset: sheet.current_offset(),
            height: sheet.current_height(),
            backdrop_opacity: sheet.backdrop_opacity(),
            show_back: sheet.can_go_back(),
            title,
            content,
        })
    }
}

fn trigger_view(channel: &MenuChannel, active: bool) -> TriggerView {
    TriggerView {
        channel_id: channel.id.clone(),
        label: channel.label.clone(),
        badge_text: channel.badge_text.clone(),
        has_panel: channel.has_panel(),
        active,
    }
}

fn list_views(channel: &MenuChannel, narrow: bool) -> Vec<ListView> {
    channel
        .lists
        .iter()
        .enumerate()
        .map(|(list_index, list)| list_view(&channel.id, list_index, list, narrow))
        .collect()
}

fn list_view(channel_id: &str, list_index: usize, list: &MenuList, narrow: bool) -> ListView {
    ListView {
        group_label: list.group_label.clone(),
        group_badge: list.group_badge.clone(),
        items: list
            .items
            .iter()
            .enumerate()
            .map(|(item_index, item)| {
                item_view(ItemRef::new(channel_id, list_index, item_index), item, narrow)
            })
            .collect(),
    }
}

fn item_view(item_ref: ItemRef, item: &MenuItem, narrow: bool) -> ItemView {
    ItemView {
        item_ref,
        label: item.label.clone(),
        callout_text: item.callout_text.clone(),
        icon_id: item.icon_id.clone(),
        badge_text: item.badge_text.clone(),
        treatment: item.kind.into(),
        spans_all_columns: item.effective_spans_all_columns(narrow),
        interactive: item.is_interactive(),
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use navmenu_config::{HoverConfig, SheetConfig};

    use super::*;
    use crate::height::HeightEstimator;
    use crate::model::{MenuModel, TargetMode};
    use crate::scroll_lock::ScrollLockFlag;

    fn model() -> Rc<MenuModel> {
        Rc::new(
            MenuModel::new(vec![
                MenuChannel::new(
                    "product-channel",
                    "Product",
                    vec![MenuList::labeled(
                        "Explore",
                        vec![
                            MenuItem::new("Overview")
                                .with_target(TargetMode::Route, "/product")
                                .with_badge("New"),
                            MenuItem::new("Showcase").with_kind(ItemKind::ImageFlyoutPanel),
                        ],
                    )],
                ),
                MenuChannel::new("contact-channel", "Contact", vec![])
                    .with_target(TargetMode::InPage, "contact"),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn desktop_frame_shows_only_the_active_panel() {
        let mut hover = HoverIntentController::new(model(), &HoverConfig::default());
        let frame = DesktopFrame::build(&hover);
        assert_eq!(frame.triggers.len(), 2);
        assert!(frame.panel.is_none());

        hover.on_enter_trigger("product-channel");
        let frame = DesktopFrame::build(&hover);
        assert!(frame.triggers[0].active);
        let panel = frame.panel.unwrap();
        assert_eq!(panel.channel_id, "product-channel");
        let items = &panel.lists[0].items;
        assert_eq!(items[0].badge_text.as_deref(), Some("New"));
        assert!(items[0].interactive);
        assert!(!items[1].interactive);
        // Flyout panels only span all columns on narrow layouts.
        assert_eq!(items[1].treatment, ItemTreatment::FlyoutPanel);
        assert!(!items[1].spans_all_columns);
    }

    #[test]
    fn list_less_channel_never_renders_a_panel() {
        let mut hover = HoverIntentController::new(model(), &HoverConfig::default());
        hover.on_enter_trigger("contact-channel");
        let frame = DesktopFrame::build(&hover);
        assert!(frame.triggers[1].active);
        assert!(!frame.triggers[1].has_panel);
        assert!(frame.panel.is_none());
    }

    #[test]
    fn sheet_frame_follows_the_view_stack() {
        let mut sheet = GestureSheetController::new(
            model(),
            &SheetConfig::default(),
            HeightEstimator::default(),
            ScrollLockFlag::new(),
            800.0,
        );
        assert!(SheetFrame::build(&sheet).is_none());

        sheet.open();
        while sheet.is_animating() {
            sheet.update(16.0);
        }
        let frame = SheetFrame::build(&sheet).unwrap();
        assert_eq!(frame.title, None);
        assert!(!frame.show_back);
        assert!(matches!(frame.content, SheetContent::Channels(ref c) if c.len() == 2));

        sheet.select_channel("product-channel");
        let frame = SheetFrame::build(&sheet).unwrap();
        assert_eq!(frame.title.as_deref(), Some("Product"));
        assert!(frame.show_back);
        let SheetContent::Lists(lists) = frame.content else {
            panic!("expected submenu lists");
        };
        assert!(lists[0].items[1].spans_all_columns);
    }
}
