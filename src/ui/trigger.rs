use super::anchor_for;
use super::theme::{darken, TRIGGER_GLYPH, TRIGGER_RING, TRIGGER_SIZE, TRIGGER_TINT};
use crate::state::PanelEvent;
use crate::widget::{TriggerIcon, TriggerPlacement, TriggerWidget};
use eframe::egui;
use egui::{
    pos2, vec2, Color32, CursorIcon, FontId, Rect, Sense, Stroke, TextureHandle, TextureOptions,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::Sender;

/// The floating action button, drawn as an anchored egui area.
///
/// The panel mutates it through [`TriggerWidget`]; the host keeps a clone of
/// the same handle and calls [`show`](Self::show) once per frame. Cloning is
/// cheap: both handles share one state cell, which is fine because the
/// trigger only ever lives on the UI thread.
#[derive(Clone)]
pub struct FloatingTrigger {
    state: Rc<RefCell<TriggerState>>,
}

struct TriggerState {
    visible: bool,
    tint: Color32,
    icon: Option<TriggerIcon>,
    texture: Option<TextureHandle>,
    placement: TriggerPlacement,
    events: Option<Sender<PanelEvent>>,
}

impl FloatingTrigger {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(TriggerState {
                // Visible by default, matching the Fab invocation method.
                visible: true,
                tint: TRIGGER_TINT,
                icon: None,
                texture: None,
                placement: TriggerPlacement::default(),
                events: None,
            })),
        }
    }

    /// A second handle onto the same trigger, for handing to the panel.
    pub fn handle(&self) -> Self {
        self.clone()
    }

    /// Draws the trigger and reports taps. Call once per frame.
    pub fn show(&self, ctx: &egui::Context) {
        let mut state = self.state.borrow_mut();
        let state = &mut *state;
        if !state.visible {
            return;
        }

        if state.texture.is_none() {
            if let Some(icon) = state.icon.as_ref() {
                let image = egui::ColorImage::from_rgba_unmultiplied(
                    [icon.width as usize, icon.height as usize],
                    &icon.rgba,
                );
                state.texture =
                    Some(ctx.load_texture("helpdock-trigger-icon", image, TextureOptions::LINEAR));
            }
        }

        let (align, offset) = anchor_for(state.placement);
        egui::Area::new(egui::Id::new("helpdock_trigger"))
            .anchor(align, offset)
            .show(ctx, |ui| {
                let response = draw_button(ui, &state);
                if response.clicked() {
                    if let Some(tx) = state.events.as_ref() {
                        let _ = tx.send(PanelEvent::TriggerTapped);
                    }
                }
            });
    }
}

impl Default for FloatingTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl TriggerWidget for FloatingTrigger {
    fn connect(&mut self, events: Sender<PanelEvent>) {
        self.state.borrow_mut().events = Some(events);
    }

    fn set_visible(&mut self, visible: bool) {
        self.state.borrow_mut().visible = visible;
    }

    fn set_tint(&mut self, r: u8, g: u8, b: u8) {
        self.state.borrow_mut().tint = Color32::from_rgb(r, g, b);
    }

    fn set_icon(&mut self, icon: TriggerIcon) {
        let mut state = self.state.borrow_mut();
        state.icon = Some(icon);
        // Re-uploaded lazily on the next frame.
        state.texture = None;
    }

    fn set_placement(&mut self, placement: TriggerPlacement) {
        self.state.borrow_mut().placement = placement;
    }
}

fn draw_button(ui: &mut egui::Ui, state: &TriggerState) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(vec2(TRIGGER_SIZE, TRIGGER_SIZE), Sense::click());

    if ui.is_rect_visible(rect) {
        let center = rect.center();
        let radius = TRIGGER_SIZE / 2.0;
        let fill = if response.hovered() {
            darken(state.tint, 0.85)
        } else {
            state.tint
        };

        ui.painter()
            .circle_stroke(center, radius, Stroke::new(1.5, TRIGGER_RING));
        ui.painter().circle_filled(center, radius - 2.0, fill);

        if let Some(texture) = state.texture.as_ref() {
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            ui.painter()
                .image(texture.id(), rect.shrink(12.0), uv, Color32::WHITE);
        } else {
            ui.painter().text(
                center,
                egui::Align2::CENTER_CENTER,
                "?",
                FontId::proportional(26.0),
                TRIGGER_GLYPH,
            );
        }
    }

    response.on_hover_cursor(CursorIcon::PointingHand)
}
