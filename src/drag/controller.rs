use tracing::{debug, info};

use super::delegates::{DestinationDropDelegate, ListDropDelegate};
use crate::destinations::DestinationId;
use crate::model::CustomizationModel;

/// Snapshot captured when a drag gesture begins.
///
/// Holds only an identity key for the dragged entry; the current index is
/// resolved freshly on every event so stale indices can never be applied.
/// Both snapshot fields are immutable for the life of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    dragged: DestinationId,
    original_index: usize,
    original_usage_enabled: bool,
}

impl DragSession {
    /// Identity of the destination being moved.
    pub fn dragged(&self) -> &DestinationId {
        &self.dragged
    }

    /// Position of the dragged entry in the shown list at drag start.
    pub fn original_index(&self) -> usize {
        self.original_index
    }

    /// Value of the usage-ordering flag at drag start.
    pub fn original_usage_enabled(&self) -> bool {
        self.original_usage_enabled
    }
}

/// Mediates a single in-progress reorder gesture over the shown list.
///
/// At most one session is live at a time; starting a new drag tears the old
/// one down first, because the host gesture system does not always signal
/// end-of-drag deterministically. All lookups that can fail degrade to
/// no-ops rather than errors: pointer events race collection mutation, and a
/// gesture that visibly does nothing beats a corrupted list order.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
    hovering_list: bool,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active session, if a gesture is in progress.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// True while a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// True while the pointer is over the reorderable-list region.
    pub fn is_hovering_list(&self) -> bool {
        self.hovering_list
    }

    /// Begin a drag for the given destination, snapshotting its index and
    /// the usage-ordering flag.
    ///
    /// No session is created when the destination is not in the shown list
    /// (stale reference from the host).
    pub fn start_drag(&mut self, model: &CustomizationModel, id: &DestinationId) {
        if self.session.is_some() {
            debug!("start_drag with a live session; tearing the old one down");
            self.end_drag();
        }
        let Some(original_index) = model.shown_index_of(id) else {
            debug!(id = %id, "start_drag ignored: destination not in the shown list");
            return;
        };
        info!(id = %id, original_index, "drag session started");
        self.session = Some(DragSession {
            dragged: id.clone(),
            original_index,
            original_usage_enabled: model.usage_ordering_enabled(),
        });
    }

    /// Clear the session and reset the hover flag. Safe to call with no
    /// active session.
    pub fn end_drag(&mut self) {
        if let Some(session) = self.session.take() {
            info!(id = %session.dragged, "drag session ended");
        }
        self.hovering_list = false;
    }

    /// Delegate bound to one candidate drop target in the shown list.
    pub fn drop_delegate(&mut self, target: DestinationId) -> DestinationDropDelegate<'_> {
        DestinationDropDelegate {
            controller: self,
            target,
        }
    }

    /// Delegate bound to the whole reorderable-list region, used to track
    /// the pointer leaving the list and drops into blank list space.
    pub fn list_drop_delegate(&mut self) -> ListDropDelegate<'_> {
        ListDropDelegate { controller: self }
    }

    /// Host signal that the dragged item was dropped outside the tracked
    /// region entirely: the shown entry at `index` is hidden.
    pub fn handle_list_removal(&mut self, model: &mut CustomizationModel, index: usize) {
        if model.hide_at(index) {
            info!(index, "destination dragged out of the shown list; hidden");
        } else {
            debug!(index, "list removal ignored: no shown entry at index");
        }
    }

    pub(super) fn set_hovering_list(&mut self, hovering: bool) {
        if hovering && self.session.is_none() {
            return;
        }
        self.hovering_list = hovering;
    }

    /// Pointer entered `target`'s region mid-drag: reorder incrementally and
    /// keep the usage-ordering flag consistent with the dragged entry's
    /// distance from its origin.
    pub(super) fn hover_entered_over(
        &mut self,
        model: &mut CustomizationModel,
        target: &DestinationId,
    ) {
        let Some(session) = self.session.clone() else {
            return;
        };
        self.hovering_list = true;
        let Some(from) = model.shown_index_of(&session.dragged) else {
            debug!(id = %session.dragged, "hover ignored: dragged destination left the shown list");
            return;
        };
        apply_usage_flag(model, &session, from);
        let Some(to) = model.shown_index_of(target) else {
            debug!(id = %target, "hover ignored: target destination left the shown list");
            return;
        };
        if from != to && model.move_shown(from, to) {
            debug!(id = %session.dragged, from, to, "destination moved");
            // The splice lands the dragged entry at the target's pre-removal
            // index in both directions.
            apply_usage_flag(model, &session, to);
        }
    }
}

/// Flag invariant: `original AND (current index == original index)`. Moving
/// away from the origin disables automatic ordering for the session; moving
/// back restores the pre-drag value.
fn apply_usage_flag(model: &mut CustomizationModel, session: &DragSession, current_index: usize) {
    model.set_usage_ordering_enabled(
        session.original_usage_enabled && current_index == session.original_index,
    );
}
