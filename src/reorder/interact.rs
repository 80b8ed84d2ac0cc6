use egui::Response;

use super::gesture::ReorderGesture;
use super::types::{DragPhase, FinalizeReason, ItemVisual};

impl ReorderGesture {
    /// Drives the gesture from an egui drag [`Response`] for the row (or its drag handle).
    ///
    /// `row_height` is the laid-out height of the whole row, without inter-row spacing.
    /// Call once per frame with `ui.input(|i| i.time)`; the returned visual should be applied to
    /// the row's rect (see [`ItemVisual::apply_to_rect`]).
    pub fn interact(&mut self, response: &Response, row_height: f32, time: f64) -> ItemVisual {
        if !self.is_dragging() {
            self.measure_row(row_height);
        }

        if response.drag_started() {
            self.start(time);
        }

        if self.is_dragging() {
            if response.dragged() {
                let delta = response.drag_delta().y;
                if delta != 0.0 {
                    self.drag_by(delta);
                }
            }

            if response.drag_stopped() {
                self.finalize(time, FinalizeReason::Released);
            } else if !response.dragged() {
                // The pointer went away without a release (e.g. the widget stopped being
                // interactable, or a second touch took over).
                self.finalize(time, FinalizeReason::Cancelled);
            }
        }

        if self.tick(time) != DragPhase::Idle || self.is_animating(time) {
            response.ctx.request_repaint();
        }

        self.visual_at(time)
    }
}
