use ahash::{HashMap, HashSet};
use egui::Response;

use super::emitter::{IntentReceiver, IntentSender, ReorderHandler, intent_channel};
use super::gesture::ReorderGesture;
use super::haptics::HapticFeedback;
use super::options::ReorderOptions;
use super::types::{ItemId, ItemVisual};

/// Owns one [`ReorderGesture`] per mounted row plus the intent channel that feeds the list owner.
///
/// Typical frame:
/// 1. [`Self::sync`] with the list's current order,
/// 2. [`Self::interact`] for every row,
/// 3. [`Self::dispatch`] to apply the resulting moves to the list.
pub struct ReorderController {
    options: ReorderOptions,
    gestures: HashMap<ItemId, ReorderGesture>,
    sender: IntentSender,
    receiver: IntentReceiver,
    haptics: Option<Box<dyn HapticFeedback>>,
}

impl std::fmt::Debug for ReorderController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReorderController")
            .field("options", &self.options)
            .field("gestures", &self.gestures.len())
            .field("haptics", &self.haptics.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for ReorderController {
    fn default() -> Self {
        Self::new(ReorderOptions::default())
    }
}

impl ReorderController {
    pub fn new(options: ReorderOptions) -> Self {
        let (sender, receiver) = intent_channel();
        Self {
            options: options.sanitized(),
            gestures: HashMap::default(),
            sender,
            receiver,
            haptics: None,
        }
    }

    #[must_use]
    pub fn with_haptics(mut self, haptics: impl HapticFeedback + 'static) -> Self {
        self.haptics = Some(Box::new(haptics));
        self
    }

    pub fn options(&self) -> &ReorderOptions {
        &self.options
    }

    /// A sender for hosts that run gestures outside this controller (e.g. on a tracking thread).
    pub fn sender(&self) -> IntentSender {
        self.sender.clone()
    }

    /// Mounts, refreshes and unmounts gestures so they mirror `ids` (in list order).
    ///
    /// Rows that disappear are dropped; a row dropped mid-drag still reports `active = false`.
    pub fn sync(&mut self, ids: &[ItemId]) {
        let count = ids.len();

        for (index, &id) in ids.iter().enumerate() {
            match self.gestures.get(&id) {
                Some(gesture) => gesture.refresh(index, count),
                None => {
                    let gesture = ReorderGesture::new(
                        id,
                        index,
                        count,
                        self.sender.clone(),
                        self.options.clone(),
                    );
                    self.gestures.insert(id, gesture);
                }
            }
        }

        let present: HashSet<ItemId> = ids.iter().copied().collect();
        self.gestures.retain(|id, _| present.contains(id));
    }

    pub fn gesture(&self, id: ItemId) -> Option<&ReorderGesture> {
        self.gestures.get(&id)
    }

    pub fn gesture_mut(&mut self, id: ItemId) -> Option<&mut ReorderGesture> {
        self.gestures.get_mut(&id)
    }

    /// True while any row is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.gestures.values().any(ReorderGesture::is_dragging)
    }

    /// Forwards a row's drag response to its gesture. Unknown rows are drawn at rest.
    pub fn interact(
        &mut self,
        id: ItemId,
        response: &Response,
        row_height: f32,
        time: f64,
    ) -> ItemVisual {
        self.gestures
            .get_mut(&id)
            .map_or(ItemVisual::REST, |gesture| {
                gesture.interact(response, row_height, time)
            })
    }

    /// Delivers pending intents to the list owner, in emission order.
    pub fn dispatch(&mut self, handler: &mut dyn ReorderHandler) -> usize {
        let haptics = if self.options.haptics {
            self.haptics.as_deref()
        } else {
            None
        };
        self.receiver.dispatch(handler, haptics)
    }
}
