// Scrollbar interaction module
// Pointer state machine for a draggable handle inside a track

mod capture;
mod listener;

use std::fmt;
use std::rc::Rc;

pub use capture::{CaptureCounter, CaptureGuard, PointerCapture};
pub use listener::{ScrollbarEvent, ScrollbarListener};

#[cfg(test)]
pub use capture::MockPointerCapture;
#[cfg(test)]
pub use listener::MockScrollbarListener;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

impl Orientation {
    pub fn from_horizontal(horizontal: bool) -> Self {
        if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Orientation::Horizontal)
    }

    /// Coordinate along the axis the handle moves on.
    pub fn primary(&self, point: Point) -> f32 {
        match self {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        }
    }

    pub fn cross(&self, point: Point) -> f32 {
        match self {
            Orientation::Horizontal => point.y,
            Orientation::Vertical => point.x,
        }
    }
}

/// Pointer position in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The region the handle slides in. `origin` is its left/top corner, the anchor end.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Track {
    pub origin: Point,
    pub size: f32,
    pub thickness: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Handle {
    pub offset: f32,
    pub size: f32,
}

/// Externally supplied configuration, mirroring the component's bound options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarOptions {
    pub handle_offset: f32,
    pub handle_size: f32,
    pub horizontal: bool,
    pub show_handle: bool,
    pub is_dragging: bool,
    pub drag_offset: f32,
}

impl Default for ScrollbarOptions {
    fn default() -> Self {
        Self {
            handle_offset: 0.0,
            handle_size: 0.0,
            horizontal: false,
            show_handle: true,
            is_dragging: false,
            drag_offset: 0.0,
        }
    }
}

/// What the pointer event landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Handle,
    Track,
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { position: Point, target: PointerTarget },
    Move { position: Point },
    Up { position: Point, target: PointerTarget },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollbarState {
    Idle,
    Dragging,
}

#[derive(Debug)]
struct DragSession {
    drag_offset: f32,
    orientation: Orientation,
    capture: Option<CaptureGuard>,
}

/// Scrollbar handle interaction.
///
/// Geometry is taken as given and never validated. Offsets produced by drags
/// are clamped to the track, so no pointer event can panic.
pub struct Scrollbar {
    track: Track,
    handle: Handle,
    orientation: Orientation,
    show_handle: bool,
    idle_drag_offset: f32,
    session: Option<DragSession>,
    capture: Option<Rc<dyn PointerCapture>>,
}

impl Scrollbar {
    pub fn new(options: ScrollbarOptions, track: Track) -> Self {
        let mut scrollbar = Self {
            track,
            handle: Handle {
                offset: options.handle_offset,
                size: options.handle_size,
            },
            orientation: Orientation::from_horizontal(options.horizontal),
            show_handle: options.show_handle,
            idle_drag_offset: options.drag_offset,
            session: None,
            capture: None,
        };
        scrollbar.set_dragging(options.is_dragging);
        scrollbar
    }

    /// Attach the capture acquired for every drag session from now on.
    pub fn with_capture(mut self, capture: Rc<dyn PointerCapture>) -> Self {
        self.set_capture(capture);
        self
    }

    /// Replace the capture. An active session keeps the one it acquired, or
    /// acquires this one if it started without any.
    pub fn set_capture(&mut self, capture: Rc<dyn PointerCapture>) {
        if let Some(session) = self.session.as_mut() {
            if session.capture.is_none() {
                session.capture = Some(CaptureGuard::acquire(capture.clone()));
            }
        }
        self.capture = Some(capture);
    }

    pub fn options(&self) -> ScrollbarOptions {
        ScrollbarOptions {
            handle_offset: self.handle.offset,
            handle_size: self.handle.size,
            horizontal: self.orientation.is_horizontal(),
            show_handle: self.show_handle,
            is_dragging: self.is_dragging(),
            drag_offset: self.drag_offset(),
        }
    }

    pub fn state(&self) -> ScrollbarState {
        if self.session.is_some() {
            ScrollbarState::Dragging
        } else {
            ScrollbarState::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn track(&self) -> Track {
        self.track
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn show_handle(&self) -> bool {
        self.show_handle
    }

    pub fn drag_offset(&self) -> f32 {
        self.session
            .as_ref()
            .map(|session| session.drag_offset)
            .unwrap_or(self.idle_drag_offset)
    }

    pub fn set_track(&mut self, track: Track) {
        self.track = track;
    }

    pub fn set_handle_offset(&mut self, offset: f32) {
        self.handle.offset = offset;
    }

    pub fn set_handle_size(&mut self, size: f32) {
        self.handle.size = size;
    }

    /// Takes effect for the next drag session.
    pub fn set_horizontal(&mut self, horizontal: bool) {
        self.orientation = Orientation::from_horizontal(horizontal);
    }

    pub fn set_show_handle(&mut self, show_handle: bool) {
        self.show_handle = show_handle;
    }

    pub fn set_drag_offset(&mut self, drag_offset: f32) {
        match self.session.as_mut() {
            Some(session) => session.drag_offset = drag_offset,
            None => self.idle_drag_offset = drag_offset,
        }
    }

    /// Drive the drag state from outside. No callbacks fire: whoever flips the
    /// flag already knows about the change.
    pub fn set_dragging(&mut self, dragging: bool) {
        match (dragging, self.session.is_some()) {
            (true, false) => {
                log::debug!("Scrollbar drag started externally");
                self.begin_session(self.idle_drag_offset);
            }
            (false, true) => {
                log::debug!("Scrollbar drag stopped externally");
                self.end_session();
            }
            _ => {}
        }
    }

    /// Abandon an active drag, e.g. when the window loses focus.
    pub fn cancel_drag(&mut self) -> Option<ScrollbarEvent> {
        self.session.as_ref()?;
        log::debug!("Scrollbar drag cancelled");
        self.end_session();
        Some(ScrollbarEvent::DragEnd)
    }

    /// Largest offset the handle can reach; zero when it does not fit.
    pub fn max_offset(&self) -> f32 {
        (self.track.size - self.handle.size).max(0.0)
    }

    /// Handle position as a fraction of its travel, within `0.0..=1.0`.
    pub fn drag_fraction(&self) -> f32 {
        let travel = self.max_offset();
        if travel <= 0.0 || !self.handle.offset.is_finite() {
            return 0.0;
        }
        (self.handle.offset / travel).clamp(0.0, 1.0)
    }

    /// Pointer position along the primary axis, relative to the anchor.
    pub fn primary_position(&self, position: Point) -> f32 {
        let orientation = self
            .session
            .as_ref()
            .map(|session| session.orientation)
            .unwrap_or(self.orientation);
        orientation.primary(position) - orientation.primary(self.track.origin)
    }

    /// Hit-test `position` against the track and handle rectangles.
    pub fn hit_test(&self, position: Point) -> PointerTarget {
        let along = self.primary_position(position);
        let across = self.orientation.cross(position) - self.orientation.cross(self.track.origin);

        if !(0.0..=self.track.size).contains(&along) || !(0.0..=self.track.thickness).contains(&across) {
            return PointerTarget::Outside;
        }

        let on_handle = along >= self.handle.offset && along < self.handle.offset + self.handle.size;
        if self.show_handle && on_handle {
            PointerTarget::Handle
        } else {
            PointerTarget::Track
        }
    }

    /// Apply one pointer event and return the notification it produced, if any.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<ScrollbarEvent> {
        match event {
            PointerEvent::Down { position, target } => self.pointer_down(position, target),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { target, .. } => self.pointer_up(target),
        }
    }

    /// Like [`Scrollbar::handle_pointer`], also invoking the listener callback.
    pub fn handle_pointer_with(
        &mut self,
        event: PointerEvent,
        listener: &mut dyn ScrollbarListener,
    ) -> Option<ScrollbarEvent> {
        let emitted = self.handle_pointer(event);
        if let Some(emitted) = emitted {
            emitted.dispatch(listener);
        }
        emitted
    }

    fn pointer_down(&mut self, position: Point, target: PointerTarget) -> Option<ScrollbarEvent> {
        if self.session.is_some() {
            return None;
        }

        let along = self.primary_position(position);
        match self.effective_target(target) {
            PointerTarget::Handle => {
                let drag_offset = along - self.handle.offset;
                log::debug!("Scrollbar drag started, drag offset {}", drag_offset);
                self.begin_session(drag_offset);
                Some(ScrollbarEvent::DragStart)
            }
            PointerTarget::Track => {
                let towards_anchor = along < self.handle.offset;
                log::debug!("Scrollbar track click at {}, towards anchor: {}", along, towards_anchor);
                Some(ScrollbarEvent::JumpTo { towards_anchor })
            }
            PointerTarget::Outside => None,
        }
    }

    fn pointer_move(&mut self, position: Point) -> Option<ScrollbarEvent> {
        let drag_offset = self.session.as_ref()?.drag_offset;
        let offset = (self.primary_position(position) - drag_offset).clamp(0.0, self.max_offset());

        if !offset.is_finite() || offset == self.handle.offset {
            return None;
        }

        self.handle.offset = offset;
        Some(ScrollbarEvent::Drag { offset })
    }

    fn pointer_up(&mut self, target: PointerTarget) -> Option<ScrollbarEvent> {
        if self.session.is_some() {
            log::debug!("Scrollbar drag ended at offset {}", self.handle.offset);
            self.end_session();
            return Some(ScrollbarEvent::DragEnd);
        }

        // A release on the handle ends whatever drag the embedder may be tracking.
        (self.effective_target(target) == PointerTarget::Handle).then_some(ScrollbarEvent::DragEnd)
    }

    fn effective_target(&self, target: PointerTarget) -> PointerTarget {
        match target {
            PointerTarget::Handle if !self.show_handle => PointerTarget::Track,
            other => other,
        }
    }

    fn begin_session(&mut self, drag_offset: f32) {
        self.session = Some(DragSession {
            drag_offset,
            orientation: self.orientation,
            capture: self.capture.clone().map(CaptureGuard::acquire),
        });
    }

    fn end_session(&mut self) {
        if let Some(session) = self.session.take() {
            self.idle_drag_offset = session.drag_offset;
        }
    }
}

impl fmt::Debug for Scrollbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scrollbar")
            .field("track", &self.track)
            .field("handle", &self.handle)
            .field("orientation", &self.orientation)
            .field("show_handle", &self.show_handle)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
