use crate::reorder::{ItemId, MoveDirection, ReorderHandler};

/// A minimal list owner: an ordered set of rows that accepts single-step moves.
///
/// This is the authority the reorder gestures talk to. While a drag is live it reports
/// [`Self::is_reordering`], which hosts use to suppress conflicting interactions such as opening
/// an editor for a row.
#[derive(Clone, Debug)]
pub struct ReorderableList<T> {
    rows: Vec<(ItemId, T)>,
    /// Drags currently live. More than one row can be dragged at once (multi-touch, or rows
    /// tracked on separate threads).
    active_drags: usize,
}

impl<T> Default for ReorderableList<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            active_drags: 0,
        }
    }
}

impl<T> ReorderableList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: ItemId, value: T) {
        self.rows.push((id, value));
    }

    pub fn remove(&mut self, id: ItemId) -> Option<T> {
        let index = self.index_of(id)?;
        Some(self.rows.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.rows.iter().position(|(row_id, _)| *row_id == id)
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.rows.iter().map(|(id, _)| *id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &T)> {
        self.rows.iter().map(|(id, value)| (*id, value))
    }

    pub fn get(&self, id: ItemId) -> Option<&T> {
        self.rows
            .iter()
            .find(|(row_id, _)| *row_id == id)
            .map(|(_, value)| value)
    }

    /// Swaps `id` with its neighbor `offset` steps away.
    ///
    /// Returns `false` for unknown ids and for moves that would leave the list.
    pub fn move_by_offset(&mut self, id: ItemId, offset: i32) -> bool {
        let Some(from) = self.index_of(id) else {
            log::debug!("move_by_offset ignored: unknown item {id:?}");
            return false;
        };
        let Some(to) = from.checked_add_signed(offset as isize) else {
            return false;
        };
        if to >= self.rows.len() || to == from {
            return false;
        }
        let row = self.rows.remove(from);
        self.rows.insert(to, row);
        true
    }

    /// True while at least one drag is live.
    pub fn is_reordering(&self) -> bool {
        self.active_drags > 0
    }

    pub fn begin_reorder(&mut self) {
        self.active_drags += 1;
    }

    /// Ends one live drag. Unmatched calls are ignored.
    pub fn end_reorder(&mut self) {
        if self.active_drags == 0 {
            log::debug!("end_reorder without a live drag");
            return;
        }
        self.active_drags -= 1;
    }

    /// Row editors stay closed while a reorder is live.
    pub fn can_open_editor(&self) -> bool {
        !self.is_reordering()
    }
}

impl<T> ReorderHandler for ReorderableList<T> {
    fn on_move_by_offset(&mut self, item: ItemId, direction: MoveDirection) {
        self.move_by_offset(item, direction.offset());
    }

    fn on_drag_state_change(&mut self, active: bool) {
        if active {
            self.begin_reorder();
        } else {
            self.end_reorder();
        }
    }
}
