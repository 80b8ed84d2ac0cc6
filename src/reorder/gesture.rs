use super::clamp::{DragSample, drag_step};
use super::emitter::IntentSender;
use super::options::ReorderOptions;
use super::session::{DragSession, SessionCell};
use super::types::{DragPhase, FinalizeReason, ItemId, ItemVisual, MoveDirection};

/// Drives one row through `Idle -> Active -> Settling -> Idle`.
///
/// Runs on the tracking side: every method returns without waiting on the application side.
/// Reorder intents and drag-state changes go out through the [`IntentSender`] in the order they
/// happen.
#[derive(Debug)]
pub struct ReorderGesture {
    item: ItemId,
    session: SessionCell,
    intents: IntentSender,
    options: ReorderOptions,
    phase: DragPhase,

    /// Cumulative raw translation of the running drag, for hosts that report deltas.
    translation: f32,

    next_drag_id: u64,
    drag_id: u64,
}

impl ReorderGesture {
    pub fn new(
        item: ItemId,
        index: usize,
        list_size: usize,
        intents: IntentSender,
        options: ReorderOptions,
    ) -> Self {
        let options = options.sanitized();
        let session = DragSession::new(index, list_size, options.row_extent(None));
        Self {
            item,
            session: SessionCell::new(session),
            intents,
            options,
            phase: DragPhase::Idle,
            translation: 0.0,
            next_drag_id: 1,
            drag_id: 0,
        }
    }

    pub fn item(&self) -> ItemId {
        self.item
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Active
    }

    pub fn options(&self) -> &ReorderOptions {
        &self.options
    }

    /// Handle to the shared session, e.g. for a renderer on another thread.
    pub fn session(&self) -> &SessionCell {
        &self.session
    }

    /// Adopts the list owner's current index and length. Safe to call at any time.
    pub fn refresh(&self, index: usize, list_size: usize) {
        self.session.refresh(index, list_size);
    }

    /// Records the laid-out height of the row (without spacing).
    pub fn measure_row(&self, height: f32) {
        self.session
            .set_row_extent(self.options.row_extent(Some(height)));
    }

    /// Swaps the item id and intent sink without touching the session.
    ///
    /// An in-flight drag keeps its offset, carried offset and index.
    pub fn rebind(&mut self, item: ItemId, intents: IntentSender) {
        self.item = item;
        self.intents = intents;
    }

    /// Begins a drag. Returns `false` (and does nothing) if a drag is already active.
    pub fn start(&mut self, time: f64) -> bool {
        if self.phase == DragPhase::Active {
            return false;
        }

        self.drag_id = self.next_drag_id;
        self.next_drag_id = self.next_drag_id.saturating_add(1);
        self.translation = 0.0;
        self.phase = DragPhase::Active;

        let index = self.session.with(|s| {
            s.begin_drag(time, self.options.lift_scale, self.options.lift_duration);
            s.index
        });
        log::debug!(
            "reorder START item={:?} drag={} index={index}",
            self.item,
            self.drag_id
        );

        self.intents.notify_drag_state(self.item, true);
        true
    }

    /// Feeds one sample of cumulative translation since [`Self::start`].
    ///
    /// Returns the swap emitted for this sample, if any. Ignored unless a drag is active.
    pub fn update(&mut self, translation: f32) -> Option<MoveDirection> {
        if self.phase != DragPhase::Active || !translation.is_finite() {
            return None;
        }
        self.translation = translation;

        let threshold_fraction = self.options.swap_threshold_fraction;
        let step = self.session.with(|s| {
            let step = drag_step(DragSample {
                translation,
                carried_offset: s.carried_offset,
                index: s.index,
                list_size: s.list_size,
                row_extent: s.row_extent,
                threshold_fraction,
            });
            s.apply_step(step);
            step
        });

        let direction = step.swap?;
        log::debug!(
            "reorder SWAP item={:?} drag={} dir={} index={}",
            self.item,
            self.drag_id,
            direction.offset(),
            step.index
        );
        self.intents.emit_move(self.item, direction);
        Some(direction)
    }

    /// Feeds a per-frame delta; accumulated into the cumulative translation.
    pub fn drag_by(&mut self, delta_y: f32) -> Option<MoveDirection> {
        if self.phase != DragPhase::Active {
            return None;
        }
        self.update(self.translation + delta_y)
    }

    /// Ends the drag (release or cancellation alike) and starts the settle animation.
    ///
    /// Returns `false` if no drag was active.
    pub fn finalize(&mut self, time: f64, reason: FinalizeReason) -> bool {
        if self.phase != DragPhase::Active {
            return false;
        }

        self.phase = DragPhase::Settling;
        let (index, offset) = self.session.with(|s| {
            let offset = s.visual_offset_y;
            s.end_drag(time, self.options.settle_duration);
            (s.index, offset)
        });
        log::debug!(
            "reorder END item={:?} drag={} reason={reason:?} index={index} residual_offset={offset:.1}",
            self.item,
            self.drag_id
        );

        self.intents.notify_drag_state(self.item, false);
        true
    }

    /// Advances `Settling -> Idle` once the settle animation is done.
    pub fn tick(&mut self, time: f64) -> DragPhase {
        if self.phase == DragPhase::Settling && self.session.with(|s| s.finish_settle_if_done(time)) {
            self.phase = DragPhase::Idle;
        }
        self.phase
    }

    pub fn visual_at(&self, time: f64) -> ItemVisual {
        self.session.visual_at(time)
    }

    pub fn is_animating(&self, time: f64) -> bool {
        self.phase == DragPhase::Settling || self.session.snapshot().is_animating(time)
    }
}

impl Drop for ReorderGesture {
    fn drop(&mut self) {
        if self.phase == DragPhase::Active {
            self.finalize(0.0, FinalizeReason::Cancelled);
        }
    }
}
