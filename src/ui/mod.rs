pub mod theme;
pub mod trigger;

use crate::widget::{Corner, TriggerPlacement};
use eframe::egui::{vec2, Align2, Vec2};

pub use trigger::FloatingTrigger;

/// Maps a trigger placement onto an egui area anchor and inset offset.
pub(crate) fn anchor_for(placement: TriggerPlacement) -> (Align2, Vec2) {
    match placement.corner {
        Corner::BottomLeft => (
            Align2::LEFT_BOTTOM,
            vec2(placement.margin_x, -placement.margin_y),
        ),
        Corner::BottomRight => (
            Align2::RIGHT_BOTTOM,
            vec2(-placement.margin_x, -placement.margin_y),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_inset_toward_the_window_center() {
        let (align, offset) = anchor_for(TriggerPlacement {
            corner: Corner::BottomRight,
            margin_x: 10.0,
            margin_y: 10.0,
        });
        assert_eq!(align, Align2::RIGHT_BOTTOM);
        assert_eq!(offset, vec2(-10.0, -10.0));

        let (align, offset) = anchor_for(TriggerPlacement::default());
        assert_eq!(align, Align2::LEFT_BOTTOM);
        assert_eq!(offset, vec2(40.0, -40.0));
    }
}
