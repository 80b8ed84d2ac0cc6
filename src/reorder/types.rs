use egui::{Rect, Vec2};

/// Identifies a row. Must stay stable while the row moves around the list.
pub type ItemId = egui::Id;

/// Direction of a single-step reorder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum MoveDirection {
    /// Towards index 0.
    Up,
    /// Towards the end of the list.
    Down,
}

impl MoveDirection {
    /// The index delta: `-1` for [`Self::Up`], `+1` for [`Self::Down`].
    pub fn offset(self) -> i32 {
        match self {
            Self::Up => -1,
            Self::Down => 1,
        }
    }

    pub fn from_offset(offset: i32) -> Option<Self> {
        match offset.signum() {
            -1 => Some(Self::Up),
            1 => Some(Self::Down),
            _ => None,
        }
    }
}

/// Lifecycle of a single drag on one row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,

    /// The pointer owns the row; samples are being tracked.
    Active,

    /// Released; the row is animating back to rest.
    Settling,
}

/// Why a drag ended. Both reasons settle and notify the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinalizeReason {
    Released,

    /// Pointer ownership was lost (multi-touch interruption, focus loss, unmount).
    Cancelled,
}

/// What the tracking side hands over to the application side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReorderIntent {
    DragStateChanged { item: ItemId, active: bool },
    MoveByOffset { item: ItemId, direction: MoveDirection },
}

/// How a row should currently be drawn relative to its laid-out rect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemVisual {
    pub offset_y: f32,
    pub scale: f32,
}

impl ItemVisual {
    pub const REST: Self = Self {
        offset_y: 0.0,
        scale: 1.0,
    };

    /// Scales `rect` about its center, then shifts it by the drag offset.
    pub fn apply_to_rect(&self, rect: Rect) -> Rect {
        rect.scale_from_center(self.scale)
            .translate(Vec2::new(0.0, self.offset_y))
    }
}

impl Default for ItemVisual {
    fn default() -> Self {
        Self::REST
    }
}
