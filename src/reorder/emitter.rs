use std::sync::mpsc;

use super::haptics::{HapticFeedback, pulse_best_effort};
use super::types::{ItemId, MoveDirection, ReorderIntent};

/// Creates the hop from the tracking side (pointer samples) to the application side (list state).
///
/// Intents arrive in the order they were sent.
pub fn intent_channel() -> (IntentSender, IntentReceiver) {
    let (tx, rx) = mpsc::channel();
    (IntentSender(tx), IntentReceiver(rx))
}

/// Tracking-side end of [`intent_channel`]. Sending never blocks and never fails loudly.
#[derive(Clone, Debug)]
pub struct IntentSender(mpsc::Sender<ReorderIntent>);

impl IntentSender {
    pub fn send(&self, intent: ReorderIntent) {
        if self.0.send(intent).is_err() {
            log::trace!("reorder intent dropped (receiver gone): {intent:?}");
        }
    }

    pub fn emit_move(&self, item: ItemId, direction: MoveDirection) {
        self.send(ReorderIntent::MoveByOffset { item, direction });
    }

    pub fn notify_drag_state(&self, item: ItemId, active: bool) {
        self.send(ReorderIntent::DragStateChanged { item, active });
    }
}

/// Receives reorder intents on the application side.
pub trait ReorderHandler {
    /// Move `item` one position in `direction`. The handler is the only authority that commits
    /// the new order.
    fn on_move_by_offset(&mut self, item: ItemId, direction: MoveDirection);

    /// Some row started (`true`) or stopped (`false`) being dragged.
    fn on_drag_state_change(&mut self, _active: bool) {}
}

/// A [`ReorderHandler`] made of closures. The drag-state closure is optional.
pub struct ReorderCallbacks<M, S = fn(bool)> {
    pub on_move_by_offset: M,
    pub on_drag_state_change: Option<S>,
}

impl<M> ReorderCallbacks<M>
where
    M: FnMut(ItemId, MoveDirection),
{
    pub fn new(on_move_by_offset: M) -> Self {
        Self {
            on_move_by_offset,
            on_drag_state_change: None,
        }
    }
}

impl<M, S> ReorderCallbacks<M, S> {
    pub fn with_drag_state_change<S2>(self, on_drag_state_change: S2) -> ReorderCallbacks<M, S2>
    where
        S2: FnMut(bool),
    {
        ReorderCallbacks {
            on_move_by_offset: self.on_move_by_offset,
            on_drag_state_change: Some(on_drag_state_change),
        }
    }
}

impl<M, S> ReorderHandler for ReorderCallbacks<M, S>
where
    M: FnMut(ItemId, MoveDirection),
    S: FnMut(bool),
{
    fn on_move_by_offset(&mut self, item: ItemId, direction: MoveDirection) {
        (self.on_move_by_offset)(item, direction);
    }

    fn on_drag_state_change(&mut self, active: bool) {
        if let Some(callback) = &mut self.on_drag_state_change {
            callback(active);
        }
    }
}

/// Application-side end of [`intent_channel`].
#[derive(Debug)]
pub struct IntentReceiver(mpsc::Receiver<ReorderIntent>);

impl IntentReceiver {
    /// Drains everything sent so far, without waiting for more.
    pub fn drain(&self) -> Vec<ReorderIntent> {
        self.0.try_iter().collect()
    }

    /// Delivers all pending intents to `handler`, in emission order.
    ///
    /// Each move is followed by a best-effort haptic pulse; a failing pulse is logged and ignored.
    /// Returns the number of intents delivered.
    pub fn dispatch(
        &self,
        handler: &mut dyn ReorderHandler,
        haptics: Option<&dyn HapticFeedback>,
    ) -> usize {
        let mut delivered = 0;
        for intent in self.0.try_iter() {
            deliver(intent, handler, haptics);
            delivered += 1;
        }
        delivered
    }
}

fn deliver(
    intent: ReorderIntent,
    handler: &mut dyn ReorderHandler,
    haptics: Option<&dyn HapticFeedback>,
) {
    match intent {
        ReorderIntent::MoveByOffset { item, direction } => {
            handler.on_move_by_offset(item, direction);
            pulse_best_effort(haptics);
        }
        ReorderIntent::DragStateChanged { active, .. } => {
            handler.on_drag_state_change(active);
        }
    }
}
