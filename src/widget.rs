use crate::state::PanelEvent;
use std::sync::mpsc::Sender;

/// Decoded RGBA8 icon for the trigger face.
#[derive(Clone)]
pub struct TriggerIcon {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Screen corner the trigger is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    BottomLeft,
    BottomRight,
}

/// Where the trigger sits: anchored corner plus insets from that corner.
/// Always replaced as one value so the trigger never shows a half-applied
/// layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerPlacement {
    pub corner: Corner,
    /// Inset from the anchored side edge, in points.
    pub margin_x: f32,
    /// Inset from the bottom edge, in points.
    pub margin_y: f32,
}

impl Default for TriggerPlacement {
    fn default() -> Self {
        Self {
            corner: Corner::BottomLeft,
            margin_x: 40.0,
            margin_y: 40.0,
        }
    }
}

/// The floating trigger seam. The panel only ever talks to the trigger
/// through this trait; hosts bring their own widget (the crate ships an egui
/// one, `ui::FloatingTrigger`).
///
/// Implementations start visible with their default styling, matching the
/// `Fab` invocation method.
pub trait TriggerWidget {
    /// Wires the tap handler. A tap sends [`PanelEvent::TriggerTapped`] on
    /// the given channel.
    fn connect(&mut self, events: Sender<PanelEvent>);
    fn set_visible(&mut self, visible: bool);
    /// Background tint from the remote primary color.
    fn set_tint(&mut self, r: u8, g: u8, b: u8);
    /// Replaces the trigger face with a downloaded icon.
    fn set_icon(&mut self, icon: TriggerIcon);
    fn set_placement(&mut self, placement: TriggerPlacement);
}
