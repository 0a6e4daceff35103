use egui::{Color32, Visuals};

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

#[derive(Clone, Copy)]
pub(crate) struct GridPalette {
    pub header_bg: Color32,
    pub regular_bg: Color32,
    pub weekend_bg: Color32,
    pub today_bg: Color32,
    pub selected_bg: Color32,
    pub slot_line: Color32,
    pub header_line: Color32,
    pub hover_overlay: Color32,
    pub text: Color32,
    pub weak_text: Color32,
}

impl GridPalette {
    pub fn from_visuals(visuals: &Visuals) -> Self {
        let accent = visuals.selection.bg_fill;
        let base = visuals.extreme_bg_color;
        let border = visuals.widgets.noninteractive.bg_stroke.color;
        Self {
            header_bg: blend(visuals.panel_fill, base, 0.4),
            regular_bg: base,
            weekend_bg: visuals.faint_bg_color,
            today_bg: blend(base, accent, 0.15),
            selected_bg: blend(base, accent, 0.6),
            slot_line: with_alpha(border, 170),
            header_line: border,
            hover_overlay: with_alpha(accent, if visuals.dark_mode { 80 } else { 50 }),
            text: visuals.text_color(),
            weak_text: visuals.weak_text_color(),
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct ScrollbarPalette {
    pub track_bg: Color32,
    pub handle: Color32,
    pub handle_active: Color32,
}

impl ScrollbarPalette {
    pub fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            track_bg: visuals.extreme_bg_color,
            handle: visuals.widgets.inactive.bg_fill,
            handle_active: visuals.widgets.active.bg_fill,
        }
    }
}
