//! Drag-to-reorder rows for [egui](https://github.com/emilk/egui) lists.
//!
//! See [`reorder`] for the gesture model and [`ReorderableList`] for a ready-made list owner.

#![forbid(unsafe_code)]

pub mod list;
pub mod reorder;

pub use list::ReorderableList;
pub use reorder::{
    DragPhase, DragSession, FinalizeReason, HapticError, HapticFeedback, IntentReceiver,
    IntentSender, ItemId, ItemVisual, MoveDirection, ReorderCallbacks, ReorderController,
    ReorderGesture, ReorderHandler, ReorderIntent, ReorderOptions, SessionCell, intent_channel,
};

#[cfg(feature = "persistence")]
pub use reorder::OptionsError;
