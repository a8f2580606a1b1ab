//! Responsive site navigation menu.
//!
//! One immutable `MenuModel` feeds two presentations: hover flyouts on wide
//! viewports (`HoverIntentController`) and a draggable bottom sheet on narrow
//! ones (`GestureSheetController`). Both route activations through the same
//! `ClickRouter`, and `NavigationShell` picks between them from the viewport
//! signal.
//!
//! Nothing here reads a clock: hosts call `update(delta_ms)` once per frame.

pub mod animation;
pub mod error;
pub mod event_handler;
pub mod height;
pub mod hover;
pub mod model;
pub mod router;
pub mod scroll_lock;
pub mod sheet;
pub mod shell;
pub mod timer;
pub mod view;
pub mod view_stack;

pub use error::{MenuError, Result};
pub use event_handler::{EventResult, MenuInput};
pub use height::HeightEstimator;
pub use hover::{HoverIntentController, HoverState};
pub use model::{ItemKind, ItemRef, MenuChannel, MenuItem, MenuList, MenuModel, Target, TargetMode};
pub use router::{
    AnchorScroller, BrowsingContext, ClickRouter, Collaborators, CommandLog, ExternalOpener,
    NavigationCommand, NavigationHost, Navigator, RouteAction, RouteContext,
};
pub use scroll_lock::{ScrollLock, ScrollLockFlag, ScrollLockTarget};
pub use sheet::{ChannelSelection, DragOutcome, GestureSheetController, SheetEvent, SheetPhase};
pub use shell::{NavigationShell, Presentation};
pub use view::{DesktopFrame, ItemTreatment, SheetContent, SheetFrame};
pub use view_stack::{SheetView, ViewFrame, ViewStack};
