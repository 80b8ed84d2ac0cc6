use std::sync::Arc;

use egui::mutex::Mutex;

use super::animation::Tween;
use super::clamp::{DragStep, effective_row_extent};
use super::types::ItemVisual;

/// Live drag state for one row.
///
/// Written by the tracking side on every sample, refreshed by the application side whenever the
/// list order or length changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub index: usize,
    pub list_size: usize,
    pub dragging: bool,
    pub visual_offset_y: f32,
    pub carried_offset: f32,
    pub row_extent: f32,
    offset_anim: Option<Tween>,
    scale_anim: Tween,
}

impl DragSession {
    pub(super) fn new(index: usize, list_size: usize, row_extent: f32) -> Self {
        let mut session = Self {
            index: 0,
            list_size: 1,
            dragging: false,
            visual_offset_y: 0.0,
            carried_offset: 0.0,
            row_extent: effective_row_extent(row_extent),
            offset_anim: None,
            scale_anim: Tween::settled(1.0),
        };
        session.refresh(index, list_size);
        session
    }

    /// Adopts the externally owned position. `list_size` is floored at 1 and `index` clamped into it.
    pub(super) fn refresh(&mut self, index: usize, list_size: usize) {
        self.list_size = list_size.max(1);
        self.index = index.min(self.list_size - 1);
    }

    pub(super) fn begin_drag(&mut self, time: f64, lift_scale: f32, lift_duration: f32) {
        let current_scale = self.scale_anim.value_at(time);
        self.dragging = true;
        self.carried_offset = 0.0;
        self.offset_anim = None;
        self.visual_offset_y = 0.0;
        self.scale_anim = Tween::new(current_scale, lift_scale, time, lift_duration);
    }

    pub(super) fn apply_step(&mut self, step: DragStep) {
        self.visual_offset_y = step.visual_offset_y;
        self.carried_offset = step.carried_offset;
        self.index = step.index;
    }

    pub(super) fn end_drag(&mut self, time: f64, settle_duration: f32) {
        let current_scale = self.scale_anim.value_at(time);
        self.dragging = false;
        self.offset_anim = Some(Tween::new(self.visual_offset_y, 0.0, time, settle_duration));
        self.scale_anim = Tween::new(current_scale, 1.0, time, settle_duration);
    }

    /// True once the settle animation has reached rest; clears the finished animation.
    pub(super) fn finish_settle_if_done(&mut self, time: f64) -> bool {
        let offset_done = self.offset_anim.is_none_or(|anim| anim.is_finished(time));
        if offset_done && self.scale_anim.is_finished(time) {
            self.offset_anim = None;
            self.visual_offset_y = 0.0;
            self.scale_anim = Tween::settled(1.0);
            return true;
        }
        false
    }

    pub fn visual_at(&self, time: f64) -> ItemVisual {
        let offset_y = match (&self.offset_anim, self.dragging) {
            (Some(anim), false) => anim.value_at(time),
            _ => self.visual_offset_y,
        };
        ItemVisual {
            offset_y,
            scale: self.scale_anim.value_at(time),
        }
    }

    pub fn is_animating(&self, time: f64) -> bool {
        !self.scale_anim.is_finished(time)
            || self.offset_anim.is_some_and(|anim| !anim.is_finished(time))
    }
}

/// Shared handle to a row's [`DragSession`].
///
/// Writes through one handle are visible to every clone as soon as the write returns.
#[derive(Clone)]
pub struct SessionCell(Arc<Mutex<DragSession>>);

impl std::fmt::Debug for SessionCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SessionCell").field(&self.snapshot()).finish()
    }
}

impl SessionCell {
    pub(super) fn new(session: DragSession) -> Self {
        Self(Arc::new(Mutex::new(session)))
    }

    pub fn snapshot(&self) -> DragSession {
        *self.0.lock()
    }

    pub(super) fn with<R>(&self, f: impl FnOnce(&mut DragSession) -> R) -> R {
        f(&mut self.0.lock())
    }

    /// Called by the list owner whenever the row's position or the list length changes.
    pub fn refresh(&self, index: usize, list_size: usize) {
        self.with(|s| s.refresh(index, list_size));
    }

    /// Updates the distance between neighboring rows (measured height plus spacing).
    ///
    /// Ignored while a drag is live so the clamp bounds of the running gesture stay consistent.
    pub fn set_row_extent(&self, row_extent: f32) {
        self.with(|s| {
            if !s.dragging {
                s.row_extent = effective_row_extent(row_extent);
            }
        });
    }

    pub fn visual_at(&self, time: f64) -> ItemVisual {
        self.0.lock().visual_at(time)
    }
}
