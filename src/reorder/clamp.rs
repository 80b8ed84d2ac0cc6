//! Threshold/clamp arithmetic for a single drag sample.
//!
//! All functions here are pure: they take the session's current numbers and return the new ones.

use super::options::ReorderOptions;
use super::types::MoveDirection;

/// Inputs of one drag-update sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSample {
    /// Cumulative raw vertical translation since the gesture started.
    pub translation: f32,
    pub carried_offset: f32,
    pub index: usize,
    pub list_size: usize,
    pub row_extent: f32,
    pub threshold_fraction: f32,
}

/// Result of one drag-update sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragStep {
    pub visual_offset_y: f32,
    pub carried_offset: f32,
    pub index: usize,
    /// At most one swap per sample.
    pub swap: Option<MoveDirection>,
}

/// Replaces a zero/negative/non-finite row extent with the nominal one.
pub(super) fn effective_row_extent(row_extent: f32) -> f32 {
    if row_extent.is_finite() && row_extent > 0.0 {
        row_extent
    } else {
        ReorderOptions::default().row_extent(None)
    }
}

/// How far the row at `index` may travel: `(-index * extent, (list_size - 1 - index) * extent)`.
pub fn drag_bounds(index: usize, list_size: usize, row_extent: f32) -> (f32, f32) {
    let last = list_size.max(1) - 1;
    let index = index.min(last);
    let low = -(index as f32) * row_extent;
    let high = (last - index) as f32 * row_extent;
    (low, high)
}

/// Distance a row of `row_extent` has to travel past its slot before it swaps.
///
/// A `fraction` outside `(0, 1]` counts as the default one.
pub fn swap_threshold(row_extent: f32, fraction: f32) -> f32 {
    let fraction = if fraction > 0.0 && fraction <= 1.0 {
        fraction
    } else {
        ReorderOptions::default().swap_threshold_fraction
    };
    row_extent * fraction
}

/// Runs one sample through clamp, rebase and threshold detection.
///
/// The downward crossing is checked first; a sample that swaps down never also swaps up.
pub fn drag_step(sample: DragSample) -> DragStep {
    let DragSample {
        translation,
        carried_offset,
        index,
        list_size,
        row_extent,
        threshold_fraction,
    } = sample;

    let row_extent = effective_row_extent(row_extent);
    let list_size = list_size.max(1);
    let last = list_size - 1;
    let index = index.min(last);

    let total = translation + carried_offset;
    let (low, high) = drag_bounds(index, list_size, row_extent);
    let clamped = total.clamp(low, high);

    let mut step = DragStep {
        visual_offset_y: clamped,
        carried_offset: clamped - translation,
        index,
        swap: None,
    };

    let threshold = swap_threshold(row_extent, threshold_fraction);

    if clamped >= threshold && index < last {
        step.carried_offset -= row_extent;
        step.visual_offset_y = translation + step.carried_offset;
        step.index = index + 1;
        step.swap = Some(MoveDirection::Down);
        return step;
    }

    if clamped <= -threshold && index > 0 {
        step.carried_offset += row_extent;
        step.visual_offset_y = translation + step.carried_offset;
        step.index = index - 1;
        step.swap = Some(MoveDirection::Up);
    }

    step
}
