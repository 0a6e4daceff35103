use serde::Serialize;

/// Notification produced by a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScrollbarEvent {
    DragStart,
    Drag { offset: f32 },
    DragEnd,
    JumpTo { towards_anchor: bool },
}

impl ScrollbarEvent {
    pub fn dispatch(self, listener: &mut dyn ScrollbarListener) {
        match self {
            ScrollbarEvent::DragStart => listener.on_drag_start(),
            ScrollbarEvent::Drag { offset } => listener.on_drag(offset),
            ScrollbarEvent::DragEnd => listener.on_drag_end(),
            ScrollbarEvent::JumpTo { towards_anchor } => listener.on_jump_to(towards_anchor),
        }
    }
}

/// Callbacks of the embedding UI. Every method defaults to a no-op.
#[cfg_attr(test, mockall::automock)]
pub trait ScrollbarListener {
    fn on_drag_start(&mut self) {}

    /// `offset` is the new, already clamped handle offset.
    fn on_drag(&mut self, _offset: f32) {}

    fn on_drag_end(&mut self) {}

    fn on_jump_to(&mut self, _towards_anchor: bool) {}
}

/// Records events in arrival order.
impl ScrollbarListener for Vec<ScrollbarEvent> {
    fn on_drag_start(&mut self) {
        self.push(ScrollbarEvent::DragStart);
    }

    fn on_drag(&mut self, offset: f32) {
        self.push(ScrollbarEvent::Drag { offset });
    }

    fn on_drag_end(&mut self) {
        self.push(ScrollbarEvent::DragEnd);
    }

    fn on_jump_to(&mut self, towards_anchor: bool) {
        self.push(ScrollbarEvent::JumpTo { towards_anchor });
    }
}
