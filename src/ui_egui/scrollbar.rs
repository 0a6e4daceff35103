// Scrollbar embedding
//
// Feeds egui pointer input into the scrollbar state machine and paints the
// track and handle. egui reports the pointer for the whole window, so drags
// keep tracking after the pointer leaves the handle.

use egui::{Context, Id, Pos2, Rect, Sense, Vec2};

use super::palette::ScrollbarPalette;
use crate::models::scrollbar::{
    Orientation, Point, PointerCapture, PointerEvent, Scrollbar, ScrollbarEvent, Track,
};

/// Marks the pointer as owned by a scrollbar in egui's temporary memory.
pub struct EguiCapture {
    ctx: Context,
    id: Id,
}

impl EguiCapture {
    pub fn new(ctx: Context, id: Id) -> Self {
        Self { ctx, id }
    }

    pub fn is_captured(ctx: &Context, id: Id) -> bool {
        ctx.data_mut(|data| data.get_temp::<bool>(id).unwrap_or(false))
    }
}

impl PointerCapture for EguiCapture {
    fn acquire(&self) {
        self.ctx.data_mut(|data| data.insert_temp(self.id, true));
    }

    fn release(&self) {
        self.ctx.data_mut(|data| data.remove::<bool>(self.id));
    }
}

fn to_point(pos: Pos2) -> Point {
    Point::new(pos.x, pos.y)
}

/// Lay out the scrollbar, apply this frame's pointer input and paint it.
pub fn render_scrollbar(
    ui: &mut egui::Ui,
    scrollbar: &mut Scrollbar,
    length: f32,
    thickness: f32,
    palette: &ScrollbarPalette,
) -> Vec<ScrollbarEvent> {
    let size = match scrollbar.orientation() {
        Orientation::Horizontal => Vec2::new(length, thickness),
        Orientation::Vertical => Vec2::new(thickness, length),
    };
    let (rect, _response) = ui.allocate_exact_size(size, Sense::click_and_drag());

    scrollbar.set_track(Track {
        origin: to_point(rect.min),
        size: length,
        thickness,
    });

    let mut events = Vec::new();
    for event in pointer_events(ui, scrollbar) {
        if let Some(emitted) = scrollbar.handle_pointer(event) {
            events.push(emitted);
        }
    }

    paint(ui, rect, scrollbar, palette);
    events
}

fn pointer_events(ui: &egui::Ui, scrollbar: &Scrollbar) -> Vec<PointerEvent> {
    let (pressed, released, moving, position) = ui.input(|input| {
        (
            input.pointer.primary_pressed(),
            input.pointer.primary_released(),
            input.pointer.is_moving(),
            input.pointer.latest_pos(),
        )
    });

    let Some(position) = position.map(to_point) else {
        return Vec::new();
    };
    let target = scrollbar.hit_test(position);

    let mut events = Vec::new();
    if pressed {
        events.push(PointerEvent::Down { position, target });
    }
    if moving && scrollbar.is_dragging() {
        events.push(PointerEvent::Move { position });
    }
    if released {
        events.push(PointerEvent::Up { position, target });
    }
    events
}

fn paint(ui: &egui::Ui, rect: Rect, scrollbar: &Scrollbar, palette: &ScrollbarPalette) {
    let painter = ui.painter();
    painter.rect_filled(rect, 3.0, palette.track_bg);

    if !scrollbar.show_handle() {
        return;
    }

    let handle = scrollbar.handle();
    let handle_rect = match scrollbar.orientation() {
        Orientation::Horizontal => Rect::from_min_size(
            Pos2::new(rect.left() + handle.offset, rect.top()),
            Vec2::new(handle.size, rect.height()),
        ),
        Orientation::Vertical => Rect::from_min_size(
            Pos2::new(rect.left(), rect.top() + handle.offset),
            Vec2::new(rect.width(), handle.size),
        ),
    }
    .intersect(rect);

    let color = if scrollbar.is_dragging() {
        palette.handle_active
    } else {
        palette.handle
    };
    painter.rect_filled(handle_rect, 3.0, color);
}
