//! Composition root.
//!
//! `NavigationShell` owns one hover controller and one sheet controller, both
//! bound to the same `MenuModel` and `ClickRouter`, and forwards input to
//! whichever presentation the viewport signal selects. It holds no menu
//! state of its own beyond the current layout.

use std::rc::Rc;

use navmenu_config::{LayoutConfig, NavConfig};
use tracing::{debug, info};

use crate::error::Result;
use crate::event_handler::{EventResult, MenuInput};
use crate::height::HeightEstimator;
use crate::hover::HoverIntentController;
use crate::model::{ItemRef, MenuModel};
use crate::router::{ClickRouter, RouteContext};
use crate::scroll_lock::ScrollLockTarget;
use crate::sheet::{ChannelSelection, DragOutcome, GestureSheetController, SheetEvent};
use crate::view::{DesktopFrame, SheetFrame};

/// Which presentation is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Hover flyouts above the breakpoint.
    Desktop,
    /// Bottom sheet below it.
    Sheet,
}

pub struct NavigationShell {
    model: Rc<MenuModel>,
    router: ClickRouter,
    layout: LayoutConfig,
    hover: HoverIntentController,
    sheet: GestureSheetController,
    presentation: Presentation,
}

impl NavigationShell {
    pub fn new(
        model: Rc<MenuModel>,
        config: &NavConfig,
        scroll_target: impl ScrollLockTarget + 'static,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Self {
        let presentation = presentation_for(&config.layout, viewport_width);
        info!(?presentation, channels = model.channels().len(), "navigation shell created");
        Self {
            hover: HoverIntentController::new(Rc::clone(&model), &config.hover),
            sheet: GestureSheetController::new(
                Rc::clone(&model),
                &config.sheet,
                HeightEstimator::new(config.height.clone()),
                scroll_target,
                viewport_height,
            ),
            router: ClickRouter::new(config.layout.header_offset_px),
            layout: config.layout.clone(),
            model,
            presentation,
        }
    }

    /// Viewport resized: derive the layout from the breakpoint and resize the sheet.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.sheet.set_viewport_height(height);
        self.set_wide_layout(width >= self.layout.wide_breakpoint_px);
    }

    /// The "is-wide-layout" signal. Flipping it tears down the presentation
    /// being left so no flyout, timer or scroll lock survives the switch.
    pub fn set_wide_layout(&mut self, is_wide: bool) {
        let next = if is_wide {
            Presentation::Desktop
        } else {
            Presentation::Sheet
        };
        if next == self.presentation {
            return;
        }
        debug!(from = ?self.presentation, to = ?next, "presentation switched");
        match self.presentation {
            Presentation::Desktop => self.hover.close_now(),
            Presentation::Sheet => self.sheet.reset(),
        }
        self.presentation = next;
    }

    /// Dispatch one input to the live presentation.
    ///
    /// Routing failures from the collaborators are returned unchanged; the
    /// menu is left open in that case.
    pub fn handle_input(
        &mut self,
        input: MenuInput,
        ctx: &mut RouteContext<'_>,
    ) -> Result<EventResult> {
        match self.presentation {
            Presentation::Desktop => self.handle_desktop(input, ctx),
            Presentation::Sheet => self.handle_sheet(input, ctx),
        }
    }

    /// Advance timers and animations of both presentations.
    pub fn update(&mut self, delta_ms: f32) {
        self.hover.update(delta_ms);
        self.sheet.update(delta_ms);
    }

    /// Tear down both controllers.
    pub fn dispose(&mut self) {
        self.hover.dispose();
        self.sheet.dispose();
    }

    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    pub fn is_wide_layout(&self) -> bool {
        self.presentation == Presentation::Desktop
    }

    pub fn model(&self) -> &MenuModel {
        &self.model
    }

    pub fn router(&self) -> &ClickRouter {
        &self.router
    }

    pub fn hover(&self) -> &HoverIntentController {
        &self.hover
    }

    pub fn sheet(&self) -> &GestureSheetController {
        &self.sheet
    }

    pub fn drain_sheet_events(&mut self) -> impl Iterator<Item = SheetEvent> + '_ {
        self.sheet.drain_events()
    }

    /// Snapshot for the flyout renderer; `None` on the narrow layout.
    pub fn desktop_frame(&self) -> Option<DesktopFrame> {
        (self.presentation == Presentation::Desktop).then(|| DesktopFrame::build(&self.hover))
    }

    /// Snapshot for the sheet renderer; `None` on the wide layout or while closed.
    pub fn sheet_frame(&self) -> Option<SheetFrame> {
        if self.presentation != Presentation::Sheet {
            return None;
        }
        SheetFrame::build(&self.sheet)
    }

    fn handle_desktop(
        &mut self,
        input: MenuInput,
        ctx: &mut RouteContext<'_>,
    ) -> Result<EventResult> {
        let handled = match input {
            MenuInput::PointerEnterTrigger(id) => {
                self.hover.on_enter_trigger(&id);
                self.hover.active_channel_id() == Some(id.as_str())
            }
            MenuInput::PointerLeaveTrigger => {
                self.hover.on_leave_trigger();
                true
            }
            MenuInput::PointerEnterPanel => {
                self.hover.on_enter_panel();
                true
            }
            MenuInput::PointerLeavePanel => {
                self.hover.on_leave_panel();
                true
            }
            MenuInput::ActivateTrigger(id) => match self.model.find_channel(&id) {
                Some(channel) if channel.has_panel() => {
                    self.hover.on_enter_trigger(&id);
                    true
                }
                Some(channel) => {
                    let routed = !self.router.route_channel(channel, ctx)?.is_none();
                    if routed {
                        self.hover.close_now();
                    }
                    routed
                }
                None => false,
            },
            MenuInput::ActivateItem(item_ref) => {
                let routed = self.activate_item(&item_ref, ctx)?;
                if routed {
                    self.hover.close_now();
                }
                routed
            }
            MenuInput::Escape => {
                let was_active = self.hover.active_channel_id().is_some();
                self.hover.close_now();
                was_active
            }
            MenuInput::ToggleMenu
            | MenuInput::Back
            | MenuInput::BackdropTap
            | MenuInput::DragUpdate { .. }
            | MenuInput::DragEnd { .. } => false,
        };
        Ok(EventResult::from_bool(handled))
    }

    fn handle_sheet(
        &mut self,
        input: MenuInput,
        ctx: &mut RouteContext<'_>,
    ) -> Result<EventResult> {
        let handled = match input {
            MenuInput::ToggleMenu => {
                self.sheet.toggle();
                true
            }
            MenuInput::ActivateTrigger(id) => match self.sheet.select_channel(&id) {
                ChannelSelection::Pushed => true,
                ChannelSelection::NoPanel => {
                    let routed = match self.model.find_channel(&id) {
                        Some(channel) => !self.router.route_channel(channel, ctx)?.is_none(),
                        None => false,
                    };
                    if routed {
                        self.close_after_select();
                    }
                    routed
                }
                ChannelSelection::Ignored => false,
            },
            MenuInput::ActivateItem(item_ref) => {
                if !self.sheet.is_open() {
                    return Ok(EventResult::Ignored);
                }
                let routed = self.activate_item(&item_ref, ctx)?;
                if routed {
                    self.close_after_select();
                }
                routed
            }
            MenuInput::Back => self.sheet.back(),
            MenuInput::BackdropTap | MenuInput::Escape => {
                let visible = self.sheet.phase().is_visible();
                if visible {
                    self.sheet.close();
                }
                visible
            }
            MenuInput::DragUpdate { delta_y } => {
                if !self.sheet.is_open() {
                    return Ok(EventResult::Ignored);
                }
                self.sheet.on_drag_update(delta_y);
                true
            }
            MenuInput::DragEnd {
                delta_y,
                velocity_y,
            } => self.sheet.on_drag_end(delta_y, velocity_y) != DragOutcome::Ignored,
            MenuInput::PointerEnterTrigger(_)
            | MenuInput::PointerLeaveTrigger
            | MenuInput::PointerEnterPanel
            | MenuInput::PointerLeavePanel => false,
        };
        Ok(EventResult::from_bool(handled))
    }

    /// Route the addressed item. `false` when it does not exist or carries
    /// no target, in which case the menu stays as it is.
    fn activate_item(&self, item_ref: &ItemRef, ctx: &mut RouteContext<'_>) -> Result<bool> {
        let Some(item) = self.model.item(item_ref) else {
            debug!(?item_ref, "activation of unknown item ignored");
            return Ok(false);
        };
        Ok(!self.router.route(item, ctx)?.is_none())
    }

    fn close_after_select(&mut self) {
        if self.sheet.close_on_select() {
            self.sheet.close();
        }
    }
}

fn presentation_for(layout: &LayoutConfig, viewport_width: f32) -> Presentation {
    if viewport_width >= layout.wide_breakpoint_px {
        Presentation::Desktop
    } else {
        Presentation::Sheet
    }
}
