use eframe::egui::Color32;

// Trigger defaults before the remote preferences arrive.
pub const TRIGGER_TINT: Color32 = Color32::from_rgb(0x5a, 0x8e, 0xc0);
// White at ~70% alpha, stored premultiplied so it stays const.
pub const TRIGGER_RING: Color32 = Color32::from_rgba_premultiplied(180, 180, 180, 180);
pub const TRIGGER_GLYPH: Color32 = Color32::WHITE;

pub const TRIGGER_SIZE: f32 = 56.0;

/// Hover shade derived from whatever tint is current, so the remote primary
/// color keeps a sensible pressed/hover look.
pub fn darken(color: Color32, factor: f32) -> Color32 {
    Color32::from_rgb(
        (color.r() as f32 * factor) as u8,
        (color.g() as f32 * factor) as u8,
        (color.b() as f32 * factor) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darken_scales_channels() {
        let darker = darken(Color32::from_rgb(100, 200, 40), 0.5);
        assert_eq!((darker.r(), darker.g(), darker.b()), (50, 100, 20));
    }
}
