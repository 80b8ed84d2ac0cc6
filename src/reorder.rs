//! Drag-to-reorder for rows of a vertical list.
//!
//! The pointer drives a [`ReorderGesture`] per row on the tracking side. Each gesture keeps its
//! row glued under the pointer, clamped to the list's extent, and emits a single "move by one"
//! intent whenever the row crosses the swap threshold. Intents travel over an [`intent_channel`]
//! to the application side, where the list owner (a [`ReorderHandler`]) commits them.

mod animation;
mod clamp;
mod controller;
mod emitter;
mod gesture;
mod haptics;
mod interact;
mod options;
mod session;
mod types;



#[cfg(test)]
mod interact_tests;

pub use clamp::{DragSample, DragStep, drag_bounds, drag_step, swap_threshold};
pub use controller::ReorderController;
pub use emitter::{IntentReceiver, IntentSender, ReorderCallbacks, ReorderHandler, intent_channel};
pub use gesture::ReorderGesture;
pub use haptics::{HapticError, HapticFeedback};
pub use options::ReorderOptions;
pub use session::{DragSession, SessionCell};
pub use types::{DragPhase, FinalizeReason, ItemId, ItemVisual, MoveDirection, ReorderIntent};

#[cfg(feature = "persistence")]
pub use options::OptionsError;
