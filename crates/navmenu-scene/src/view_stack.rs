//! Navigation history inside the mobile sheet.

/// Which screen a frame shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetView {
    /// The channel list.
    Main,
    /// One channel's lists.
    Submenu,
}

/// One entry of the view-stack.
///
/// Frames refer to their channel by id; the lists themselves stay in the
/// immutable `MenuModel`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewFrame {
    pub view: SheetView,
    pub channel_id: Option<String>,
}

impl ViewFrame {
    pub fn main() -> Self {
        Self {
            view: SheetView::Main,
            channel_id: None,
        }
    }

    pub fn submenu(channel_id: impl Into<String>) -> Self {
        Self {
            view: SheetView::Submenu,
            channel_id: Some(channel_id.into()),
        }
    }
}

/// Stack of frames with `Main` pinned at the bottom while the sheet is open.
///
/// Empty only while the sheet is closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewStack {
    frames: Vec<ViewFrame>,
}

impl ViewStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to `[Main]`.
    pub fn reset(&mut self) {
        self.frames.clear();
        self.frames.push(ViewFrame::main());
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    pub fn push(&mut self, frame: ViewFrame) {
        if self.frames.is_empty() {
            self.reset();
        }
        self.frames.push(frame);
    }

    /// Pop the top frame unless only `Main` is left. Returns whether it popped.
    pub fn pop(&mut self) -> bool {
        if self.frames.len() > 1 {
            self.frames.pop();
            true
        } else {
            false
        }
    }

    pub fn top(&self) -> Option<&ViewFrame> {
        self.frames.last()
    }

    pub fn current_view(&self) -> Option<SheetView> {
        self.top().map(|f| f.view)
    }

    pub fn can_go_back(&self) -> bool {
        self.frames.len() > 1
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[ViewFrame] {
        &self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_stays_pinned() {
        let mut stack = ViewStack::new();
        stack.reset();
        assert!(!stack.pop());
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.current_view(), Some(SheetView::Main));
        assert!(!stack.can_go_back());
    }

    #[test]
    fn push_and_pop_submenus() {
        let mut stack = ViewStack::new();
        stack.reset();
        stack.push(ViewFrame::submenu("about-channel"));
        assert_eq!(stack.len(), 2);
        assert!(stack.can_go_back());
        assert_eq!(
            stack.top().unwrap().channel_id.as_deref(),
            Some("about-channel")
        );
        assert!(stack.pop());
        assert_eq!(stack.frames(), &[ViewFrame::main()]);
    }

    #[test]
    fn pushing_onto_empty_stack_inserts_main_first() {
        let mut stack = ViewStack::new();
        stack.push(ViewFrame::submenu("x"));
        assert_eq!(stack.frames()[0], ViewFrame::main());
        assert_eq!(stack.len(), 2);
    }
}
