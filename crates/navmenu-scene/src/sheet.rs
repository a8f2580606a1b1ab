//! Mobile bottom-sheet controller.
//!
//! The sheet moves through `Closed → Opening → Open → Closing → Closed`.
//! Opening and closing are springs on the sheet's vertical offset; the frame
//! height tweens to a content-driven estimate whenever the view-stack
//! changes. Every animation request replaces the one in flight, and the
//! controller only reacts to the completion of the run it started last, so
//! a stale completion can never move the sheet into the wrong phase.
//!
//! Time advances only through `update(delta_ms)`.

use std::collections::VecDeque;
use std::rc::Rc;

use navmenu_config::SheetConfig;
use tracing::debug;

use crate::animation::{
    AnimationEvent, AnimationId, AnimationManager, SheetProperty, SpringConfig, TweenSpec,
};
use crate::height::HeightEstimator;
use crate::model::{MenuChannel, MenuList, MenuModel};
use crate::scroll_lock::{ScrollLock, ScrollLockTarget};
use crate::view_stack::{SheetView, ViewFrame, ViewStack};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl SheetPhase {
    /// Whether the sheet is on screen at all.
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Lifecycle notifications, drained with `drain_events`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetEvent {
    /// The opening spring settled.
    Opened,
    /// The closing spring settled; the scroll lock has been released.
    Closed,
    /// The view-stack changed.
    ViewChanged { view: SheetView, depth: usize },
}

/// Result of `select_channel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelSelection {
    /// A submenu frame was pushed.
    Pushed,
    /// The channel has no lists; the caller should route it directly.
    NoPanel,
    /// Unknown channel, or the sheet is not showing the main view.
    Ignored,
}

/// Result of `on_drag_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Past the commit threshold; the sheet is closing.
    Dismissed,
    /// Below the threshold; the sheet springs back open.
    SnappedBack,
    /// The sheet was not open.
    Ignored,
}

#[derive(Debug, Clone, Copy)]
struct DragState {
    base_offset: f32,
}

pub struct GestureSheetController {
    model: Rc<MenuModel>,
    config: SheetConfig,
    spring: SpringConfig,
    estimator: HeightEstimator,
    phase: SheetPhase,
    stack: ViewStack,
    viewport_height: f32,
    /// Offset while no offset animation runs.
    offset: f32,
    /// Height while no height animation runs.
    height: f32,
    target_height: f32,
    animations: AnimationManager,
    /// Offset run whose completion drives the next phase change.
    offset_run: Option<AnimationId>,
    drag: Option<DragState>,
    scroll_lock: ScrollLock,
    events: VecDeque<SheetEvent>,
    disposed: bool,
}

impl GestureSheetController {
    pub fn new(
        model: Rc<MenuModel>,
        config: &SheetConfig,
        estimator: HeightEstimator,
        scroll_target: impl ScrollLockTarget + 'static,
        viewport_height: f32,
    ) -> Self {
        let viewport_height = viewport_height.max(0.0);
        Self {
            model,
            config: config.clone(),
            spring: SpringConfig::from_sheet(config).with_floor(0.0),
            estimator,
            phase: SheetPhase::Closed,
            stack: ViewStack::new(),
            viewport_height,
            offset: viewport_height,
            height: 0.0,
            target_height: 0.0,
            animations: AnimationManager::new(),
            offset_run: None,
            drag: None,
            scroll_lock: ScrollLock::new(scroll_target),
            events: VecDeque::new(),
            disposed: false,
        }
    }

    /// Open the sheet on the main view.
    ///
    /// Valid from `Closed`, or from `Closing` (the close is cancelled and the
    /// sheet springs back from wherever it is).
    pub fn open(&mut self) {
        if self.disposed {
            return;
        }
        match self.phase {
            SheetPhase::Open | SheetPhase::Opening => {
                debug!(phase = ?self.phase, "open ignored");
                return;
            }
            SheetPhase::Closed | SheetPhase::Closing => {}
        }

        let was_visible = self.phase.is_visible();
        self.drag = None;
        self.stack.reset();
        self.scroll_lock.acquire();
        self.retarget_height(!was_visible);

        let from = self.current_offset();
        let velocity = self.animations.velocity(SheetProperty::Offset);
        self.phase = SheetPhase::Opening;
        debug!(from, "sheet opening");
        self.animate_offset(from, 0.0, velocity);
        self.events.push_back(SheetEvent::ViewChanged {
            view: SheetView::Main,
            depth: 1,
        });
    }

    /// Close the sheet.
    ///
    /// Calling this while already closed still releases the scroll lock.
    pub fn close(&mut self) {
        self.close_with_velocity(0.0);
    }

    pub fn toggle(&mut self) {
        match self.phase {
            SheetPhase::Closed | SheetPhase::Closing => self.open(),
            SheetPhase::Open | SheetPhase::Opening => self.close(),
        }
    }

    /// Push the submenu of `channel_id`. Only valid on the open main view.
    pub fn select_channel(&mut self, channel_id: &str) -> ChannelSelection {
        if self.disposed
            || self.phase != SheetPhase::Open
            || self.stack.current_view() != Some(SheetView::Main)
        {
            debug!(channel_id, phase = ?self.phase, "select_channel ignored");
            return ChannelSelection::Ignored;
        }
        let Some(channel) = self.model.find_channel(channel_id) else {
            debug!(channel_id, "select_channel on unknown channel");
            return ChannelSelection::Ignored;
        };
        if !channel.has_panel() {
            return ChannelSelection::NoPanel;
        }

        self.stack.push(ViewFrame::submenu(channel_id));
        self.retarget_height(false);
        self.events.push_back(SheetEvent::ViewChanged {
            view: SheetView::Submenu,
            depth: self.stack.len(),
        });
        ChannelSelection::Pushed
    }

    /// Pop back toward the main view. No-op on the main view.
    pub fn back(&mut self) -> bool {
        if self.disposed || self.phase != SheetPhase::Open || !self.stack.pop() {
            return false;
        }
        self.retarget_height(false);
        if let Some(view) = self.stack.current_view() {
            self.events.push_back(SheetEvent::ViewChanged {
                view,
                depth: self.stack.len(),
            });
        }
        true
    }

    /// Track a drag. `delta_y` is the pointer travel since the gesture began;
    /// upward travel is clamped away and downward travel meets growing
    /// resistance.
    pub fn on_drag_update(&mut self, delta_y: f32) {
        if self.disposed || self.phase != SheetPhase::Open {
            return;
        }
        let drag = match self.drag {
            Some(drag) => drag,
            None => {
                // Grabbing the sheet mid snap-back takes over from the spring.
                let base_offset = self.current_offset();
                self.stop_offset_animation(base_offset);
                let drag = DragState { base_offset };
                self.drag = Some(drag);
                drag
            }
        };
        self.offset = self.elastic_offset(drag.base_offset + delta_y.max(0.0));
    }

    /// Finish a drag: close if it travelled or flicked far enough, otherwise
    /// spring back open carrying the release velocity.
    pub fn on_drag_end(&mut self, delta_y: f32, velocity_y: f32) -> DragOutcome {
        if self.disposed || self.phase != SheetPhase::Open {
            self.drag = None;
            return DragOutcome::Ignored;
        }
        if self.drag.is_none() {
            self.on_drag_update(delta_y);
        }
        self.drag = None;

        let delta_y = delta_y.max(0.0);
        if delta_y > self.config.commit_distance_px
            || velocity_y > self.config.commit_velocity_px_s
        {
            debug!(delta_y, velocity_y, "drag committed to close");
            self.close_with_velocity(velocity_y.max(0.0));
            DragOutcome::Dismissed
        } else {
            debug!(delta_y, velocity_y, "drag released below threshold");
            let from = self.current_offset();
            self.animate_offset(from, 0.0, velocity_y);
            DragOutcome::SnappedBack
        }
    }

    /// Viewport resized: re-estimate height and keep hidden positions offscreen.
    pub fn set_viewport_height(&mut self, viewport_height: f32) {
        if self.disposed {
            return;
        }
        self.viewport_height = viewport_height.max(0.0);
        match self.phase {
            SheetPhase::Closed => self.offset = self.hidden_offset(),
            SheetPhase::Closing => {
                let from = self.current_offset();
                let velocity = self.animations.velocity(SheetProperty::Offset);
                self.animate_offset(from, self.hidden_offset(), velocity);
                self.retarget_height(false);
            }
            SheetPhase::Opening | SheetPhase::Open => self.retarget_height(false),
        }
    }

    /// Advance animations and apply any completions.
    pub fn update(&mut self, delta_ms: f32) {
        if self.disposed {
            return;
        }
        self.animations.update(delta_ms);
        self.apply_animation_events();
    }

    /// Jump straight to `Closed` without animating, releasing the scroll lock.
    /// The sheet stays usable.
    pub fn reset(&mut self) {
        self.animations.cancel_all();
        self.animations.drain_events().for_each(drop);
        self.offset_run = None;
        self.drag = None;
        self.stack.clear();
        if self.phase.is_visible() {
            debug!(phase = ?self.phase, "sheet reset");
            self.events.push_back(SheetEvent::Closed);
        }
        self.phase = SheetPhase::Closed;
        self.offset = self.hidden_offset();
        self.scroll_lock.release();
    }

    /// Tear down: reset and ignore every later call.
    pub fn dispose(&mut self) {
        self.reset();
        self.events.clear();
        self.disposed = true;
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = SheetEvent> + '_ {
        self.events.drain(..)
    }

    pub fn phase(&self) -> SheetPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == SheetPhase::Open
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.animations.has_active_animations()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_held()
    }

    pub fn view_stack(&self) -> &ViewStack {
        &self.stack
    }

    pub fn current_view(&self) -> Option<SheetView> {
        self.stack.current_view()
    }

    pub fn can_go_back(&self) -> bool {
        self.phase == SheetPhase::Open && self.stack.can_go_back()
    }

    /// Channel shown by the top submenu frame.
    pub fn current_channel(&self) -> Option<&MenuChannel> {
        let id = self.stack.top()?.channel_id.as_deref()?;
        self.model.find_channel(id)
    }

    /// Lists shown by the top frame; empty on the main view.
    pub fn current_lists(&self) -> &[MenuList] {
        self.current_channel()
            .map(|c| c.lists.as_slice())
            .unwrap_or(&[])
    }

    pub fn model(&self) -> &MenuModel {
        &self.model
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn current_offset(&self) -> f32 {
        self.animations
            .value(SheetProperty::Offset)
            .unwrap_or(self.offset)
    }

    pub fn current_height(&self) -> f32 {
        self.animations
            .value(SheetProperty::Height)
            .unwrap_or(self.height)
    }

    pub fn target_height(&self) -> f32 {
        self.target_height
    }

    /// Backdrop opacity, fading out as the sheet moves offscreen.
    pub fn backdrop_opacity(&self) -> f32 {
        if !self.phase.is_visible() {
            return 0.0;
        }
        let hidden = self.hidden_offset();
        if hidden <= 0.0 {
            return self.config.backdrop_max_opacity;
        }
        let shown = 1.0 - (self.current_offset() / hidden).clamp(0.0, 1.0);
        self.config.backdrop_max_opacity * shown
    }

    pub fn close_on_select(&self) -> bool {
        self.config.close_on_select
    }

    fn close_with_velocity(&mut self, velocity: f32) {
        if self.disposed {
            return;
        }
        match self.phase {
            SheetPhase::Closed => {
                self.scroll_lock.release();
                return;
            }
            SheetPhase::Closing => return,
            SheetPhase::Open | SheetPhase::Opening => {}
        }
        self.drag = None;
        let from = self.current_offset();
        self.phase = SheetPhase::Closing;
        debug!(from, velocity, "sheet closing");
        self.animate_offset(from, self.hidden_offset(), velocity);
    }

    fn hidden_offset(&self) -> f32 {
        self.viewport_height.max(self.current_height())
    }

    /// Rubber-band mapping: `d·(1 - 1/(x·c/d + 1))`.
    fn elastic_offset(&self, raw: f32) -> f32 {
        if raw <= 0.0 {
            return 0.0;
        }
        let dimension = self.viewport_height.max(1.0);
        let c = self.config.drag_elastic;
        dimension * (1.0 - 1.0 / (raw * c / dimension + 1.0))
    }

    fn animate_offset(&mut self, from: f32, to: f32, velocity: f32) {
        self.offset = from;
        let id = self
            .animations
            .start_spring(SheetProperty::Offset, from, to, velocity, self.spring);
        self.offset_run = Some(id);
        self.apply_animation_events();
    }

    fn stop_offset_animation(&mut self, at: f32) {
        self.animations.cancel(SheetProperty::Offset);
        self.offset_run = None;
        self.offset = at;
        self.apply_animation_events();
    }

    /// Estimate the height for the top frame and move toward it. `snap` sets
    /// it instantly (the sheet is offscreen).
    fn retarget_height(&mut self, snap: bool) {
        let target = self.estimate_height();
        self.target_height = target;
        if snap {
            self.animations.cancel(SheetProperty::Height);
            self.height = target;
            return;
        }
        let from = self.current_height();
        self.height = from;
        self.animations.start_tween(
            SheetProperty::Height,
            from,
            target,
            TweenSpec::new(self.config.height_duration_ms),
        );
        self.apply_animation_events();
    }

    fn estimate_height(&self) -> f32 {
        match self.stack.top() {
            Some(ViewFrame {
                view: SheetView::Submenu,
                ..
            }) => self
                .estimator
                .estimate_submenu(self.current_lists(), self.viewport_height),
            _ => self
                .estimator
                .estimate_main(self.model.channels(), self.viewport_height),
        }
    }

    fn apply_animation_events(&mut self) {
        let events: Vec<AnimationEvent> = self.animations.drain_events().collect();
        for event in events {
            match event {
                AnimationEvent::Ended {
                    property: SheetProperty::Height,
                    value,
                    ..
                } => self.height = value,
                AnimationEvent::Ended {
                    id,
                    property: SheetProperty::Offset,
                    value,
                } => {
                    self.offset = value;
                    if self.offset_run == Some(id) {
                        self.offset_run = None;
                        self.on_offset_settled();
                    }
                }
                AnimationEvent::Started { .. } | AnimationEvent::Cancelled { .. } => {}
            }
        }
    }

    fn on_offset_settled(&mut self) {
        match self.phase {
            SheetPhase::Opening => {
                debug!("sheet open");
                self.phase = SheetPhase::Open;
                self.events.push_back(SheetEvent::Opened);
            }
            SheetPhase::Closing => {
                debug!("sheet closed");
                self.phase = SheetPhase::Closed;
                self.stack.clear();
                self.animations.cancel(SheetProperty::Height);
                self.scroll_lock.release();
                self.events.push_back(SheetEvent::Closed);
            }
            SheetPhase::Open | SheetPhase::Closed => {}
        }
    }
}

impl Drop for GestureSheetController {
    fn drop(&mut self) {
        self.scroll_lock.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemKind, MenuItem, TargetMode};
    use crate::scroll_lock::ScrollLockFlag;

    const FRAME_MS: f32 = 16.0;

    fn model() -> Rc<MenuModel> {
        Rc::new(
            MenuModel::new(vec![
                MenuChannel::new(
                    "about-channel",
                    "About Us",
                    vec![MenuList::labeled(
                        "Company",
                        vec![
                            MenuItem::new("Team").with_target(TargetMode::InPage, "team"),
                            MenuItem::new("Careers").with_target(TargetMode::Route, "/careers"),
                        ],
                    )],
                ),
                MenuChannel::new(
                    "product-channel",
                    "Product",
                    vec![MenuList::new(vec![
                        MenuItem::new("Docs"),
                        MenuItem::new("Showcase").with_kind(ItemKind::ImageFlyoutPanel),
                    ])],
                ),
                MenuChannel::new("solutions-channel", "Solutions", vec![])
                    .with_target(TargetMode::InPage, "solutions"),
            ])
            .unwrap(),
        )
    }

    fn sheet() -> (GestureSheetController, ScrollLockFlag) {
        let flag = ScrollLockFlag::new();
        let sheet = GestureSheetController::new(
            model(),
            &SheetConfig::default(),
            HeightEstimator::default(),
            flag.clone(),
            800.0,
        );
        (sheet, flag)
    }

    fn settle(sheet: &mut GestureSheetController) {
        for _ in 0..500 {
            if !sheet.is_animating() {
                return;
            }
            sheet.update(FRAME_MS);
        }
        panic!("sheet animations never settled");
    }

    fn open_sheet() -> (GestureSheetController, ScrollLockFlag) {
        let (mut sheet, flag) = sheet();
        sheet.open();
        settle(&mut sheet);
        assert_eq!(sheet.phase(), SheetPhase::Open);
        (sheet, flag)
    }

    #[test]
    fn open_locks_scroll_and_settles_open() {
        let (mut sheet, flag) = sheet();
        sheet.open();
        assert_eq!(sheet.phase(), SheetPhase::Opening);
        assert!(flag.is_locked());
        assert_eq!(sheet.current_offset(), 800.0);

        settle(&mut sheet);
        assert_eq!(sheet.phase(), SheetPhase::Open);
        assert_eq!(sheet.current_offset(), 0.0);
        assert_eq!(sheet.view_stack().frames(), &[ViewFrame::main()]);
        assert!(sheet.drain_events().any(|e| e == SheetEvent::Opened));
    }

    #[test]
    fn close_releases_lock_after_animation() {
        let (mut sheet, flag) = open_sheet();
        sheet.close();
        assert_eq!(sheet.phase(), SheetPhase::Closing);
        assert!(flag.is_locked());
        settle(&mut sheet);
        assert_eq!(sheet.phase(), SheetPhase::Closed);
        assert!(!flag.is_locked());
        assert!(sheet.view_stack().is_empty());
        assert_eq!(sheet.backdrop_opacity(), 0.0);
    }

    #[test]
    fn open_then_immediate_close_ends_closed_and_unlocked() {
        let (mut sheet, flag) = sheet();
        sheet.open();
        sheet.update(FRAME_MS);
        sheet.close();
        settle(&mut sheet);
        assert_eq!(sheet.phase(), SheetPhase::Closed);
        assert!(!flag.is_locked());
        assert!(!sheet.drain_events().any(|e| e == SheetEvent::Opened));
    }

    #[test]
    fn rapid_toggling_tracks_latest_request() {
        let (mut sheet, flag) = sheet();
        for _ in 0..5 {
            sheet.open();
            sheet.update(FRAME_MS);
            sheet.close();
            sheet.update(FRAME_MS);
        }
        sheet.open();
        settle(&mut sheet);
        assert_eq!(sheet.phase(), SheetPhase::Open);
        assert!(flag.is_locked());

        sheet.close();
        sheet.close();
        settle(&mut sheet);
        assert!(!flag.is_locked());
    }

    #[test]
    fn reopening_mid_close_resets_view_stack() {
        let (mut sheet, _) = open_sheet();
        sheet.select_channel("about-channel");
        sheet.close();
        sheet.update(FRAME_MS);
        sheet.open();
        assert_eq!(sheet.phase(), SheetPhase::Opening);
        assert_eq!(sheet.view_stack().len(), 1);
        settle(&mut sheet);
        assert_eq!(sheet.current_view(), Some(SheetView::Main));
    }

    #[test]
    fn close_when_closed_is_harmless() {
        let (mut sheet, flag) = sheet();
        sheet.close();
        assert_eq!(sheet.phase(), SheetPhase::Closed);
        assert!(!flag.is_locked());
        assert_eq!(flag.change_count(), 0);
    }

    #[test]
    fn drag_past_distance_threshold_commits() {
        let (mut sheet, flag) = open_sheet();
        sheet.on_drag_update(60.0);
        assert!(sheet.is_dragging());
        assert_eq!(sheet.on_drag_end(60.0, 0.0), DragOutcome::Dismissed);
        assert_eq!(sheet.phase(), SheetPhase::Closing);
        settle(&mut sheet);
        assert_eq!(sheet.phase(), SheetPhase::Closed);
        assert!(!flag.is_locked());
    }

    #[test]
    fn fast_flick_commits_even_when_short() {
        let (mut sheet, _) = open_sheet();
        sheet.on_drag_update(10.0);
        assert_eq!(sheet.on_drag_end(10.0, 900.0), DragOutcome::Dismissed);
    }

    #[test]
    fn short_slow_drag_springs_back_open() {
        let (mut sheet, flag) = open_sheet();
        sheet.on_drag_update(10.0);
        assert!(sheet.current_offset() > 0.0);
        assert_eq!(sheet.on_drag_end(10.0, 0.0), DragOutcome::SnappedBack);
        settle(&mut sheet);
        assert_eq!(sheet.phase(), SheetPhase::Open);
        assert_eq!(sheet.current_offset(), 0.0);
        assert!(flag.is_locked());
    }

    #[test]
    fn upward_flick_never_lifts_sheet_above_rest() {
        let (mut sheet, _) = open_sheet();
        sheet.on_drag_update(10.0);
        assert_eq!(sheet.on_drag_end(10.0, -2000.0), DragOutcome::SnappedBack);
        let mut lowest = sheet.current_offset();
        for _ in 0..500 {
            if !sheet.is_animating() {
                break;
            }
            sheet.update(4.0);
            lowest = lowest.min(sheet.current_offset());
        }
        assert!(lowest >= 0.0, "offset reached {lowest}");
        assert_eq!(sheet.current_offset(), 0.0);
        assert_eq!(sheet.phase(), SheetPhase::Open);
    }

    #[test]
    fn reopening_mid_close_stays_at_or_below_rest() {
        let (mut sheet, _) = open_sheet();
        sheet.close();
        sheet.update(FRAME_MS);
        sheet.update(FRAME_MS);
        sheet.open();
        let mut lowest = sheet.current_offset();
        for _ in 0..500 {
            if !sheet.is_animating() {
                break;
            }
            sheet.update(4.0);
            lowest = lowest.min(sheet.current_offset());
        }
        assert!(lowest >= 0.0, "offset reached {lowest}");
        assert_eq!(sheet.phase(), SheetPhase::Open);
    }

    #[test]
    fn upward_drag_is_clamped_at_rest_position() {
        let (mut sheet, _) = open_sheet();
        sheet.on_drag_update(-120.0);
        assert_eq!(sheet.current_offset(), 0.0);
    }

    #[test]
    fn downward_drag_meets_growing_resistance() {
        let (mut sheet, _) = open_sheet();
        sheet.on_drag_update(40.0);
        let short = sheet.current_offset();
        sheet.on_drag_update(400.0);
        let long = sheet.current_offset();
        assert!(short > 0.0 && short < 40.0);
        assert!(long > short);
        // Ten times the travel moves the sheet less than ten times as far.
        assert!(long < short * 10.0);
    }

    #[test]
    fn drag_is_ignored_unless_open() {
        let (mut sheet, _) = sheet();
        sheet.open();
        sheet.on_drag_update(100.0);
        assert!(!sheet.is_dragging());
        assert_eq!(sheet.on_drag_end(100.0, 0.0), DragOutcome::Ignored);
        assert_eq!(sheet.phase(), SheetPhase::Opening);
    }

    #[test]
    fn select_and_back_walk_the_view_stack() {
        let (mut sheet, _) = open_sheet();
        assert_eq!(
            sheet.select_channel("about-channel"),
            ChannelSelection::Pushed
        );
        assert_eq!(sheet.view_stack().len(), 2);
        assert_eq!(sheet.current_view(), Some(SheetView::Submenu));
        assert_eq!(sheet.current_lists().len(), 1);
        assert!(sheet.can_go_back());

        assert!(sheet.back());
        assert_eq!(sheet.view_stack().len(), 1);
        assert_eq!(sheet.current_view(), Some(SheetView::Main));
        assert!(!sheet.back());
        assert_eq!(sheet.view_stack().len(), 1);
        assert!(!sheet.can_go_back());
    }

    #[test]
    fn list_less_and_unknown_channels_are_not_pushed() {
        let (mut sheet, _) = open_sheet();
        assert_eq!(
            sheet.select_channel("solutions-channel"),
            ChannelSelection::NoPanel
        );
        assert_eq!(sheet.select_channel("missing"), ChannelSelection::Ignored);
        assert_eq!(sheet.view_stack().len(), 1);
    }

    #[test]
    fn select_only_from_main_view() {
        let (mut sheet, _) = open_sheet();
        sheet.select_channel("about-channel");
        assert_eq!(
            sheet.select_channel("product-channel"),
            ChannelSelection::Ignored
        );
        assert_eq!(sheet.view_stack().len(), 2);
    }

    #[test]
    fn height_follows_view_changes_within_bounds() {
        let (mut sheet, _) = open_sheet();
        let main_height = sheet.current_height();
        assert!((280.0..=680.0).contains(&main_height));

        sheet.select_channel("product-channel");
        let target = sheet.target_height();
        assert!((320.0..=680.0).contains(&target));
        settle(&mut sheet);
        assert_eq!(sheet.current_height(), target);

        sheet.back();
        settle(&mut sheet);
        assert_eq!(sheet.current_height(), main_height);
    }

    #[test]
    fn viewport_resize_reestimates_height() {
        let (mut sheet, _) = open_sheet();
        sheet.set_viewport_height(400.0);
        settle(&mut sheet);
        let h = sheet.current_height();
        assert!((140.0..=340.0).contains(&h), "height {h} outside band");
    }

    #[test]
    fn view_changes_are_reported() {
        let (mut sheet, _) = open_sheet();
        sheet.drain_events().for_each(drop);
        sheet.select_channel("about-channel");
        sheet.back();
        let events: Vec<_> = sheet.drain_events().collect();
        assert_eq!(
            events,
            vec![
                SheetEvent::ViewChanged {
                    view: SheetView::Submenu,
                    depth: 2
                },
                SheetEvent::ViewChanged {
                    view: SheetView::Main,
                    depth: 1
                },
            ]
        );
    }

    #[test]
    fn dispose_releases_lock_and_ignores_later_calls() {
        let (mut sheet, flag) = sheet();
        sheet.open();
        sheet.update(FRAME_MS);
        sheet.dispose();
        assert!(!flag.is_locked());
        assert_eq!(sheet.phase(), SheetPhase::Closed);

        sheet.open();
        sheet.update(FRAME_MS);
        assert_eq!(sheet.phase(), SheetPhase::Closed);
        assert!(!flag.is_locked());
    }

    #[test]
    fn dropping_an_open_sheet_releases_lock() {
        let (sheet, flag) = open_sheet();
        assert!(flag.is_locked());
        drop(sheet);
        assert!(!flag.is_locked());
    }

    #[test]
    fn backdrop_fades_with_offset() {
        let (mut sheet, _) = open_sheet();
        assert_eq!(sheet.backdrop_opacity(), 0.5);
        sheet.on_drag_update(300.0);
        let dragged = sheet.backdrop_opacity();
        assert!(dragged > 0.0 && dragged < 0.5);
    }
}
