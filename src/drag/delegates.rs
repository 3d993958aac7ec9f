use super::controller::DragController;
use crate::destinations::DestinationId;
use crate::model::CustomizationModel;

/// Drop behavior proposed to the host's cursor affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOperation {
    /// Entry-level drops move the dragged destination.
    Move,
    /// List-level drops in blank space. Affordance only; the reordering
    /// already applied by hover events is not rolled back.
    Cancel,
}

/// Seam the host binds its gesture callbacks to.
///
/// The model is passed per call rather than retained, so delegates stay
/// valid across arbitrary host-side collection mutation.
pub trait DropDelegate {
    /// Pointer entered this target's region.
    fn hover_entered(&mut self, model: &mut CustomizationModel);
    /// Pointer left this target's region.
    fn hover_exited(&mut self, model: &mut CustomizationModel);
    /// Pointer released over this target. Returns true when the drop was
    /// accepted.
    fn drop_released(&mut self, model: &mut CustomizationModel) -> bool;
    /// Operation the host should advertise for this target.
    fn proposed_operation(&self) -> DropOperation;
}

/// Delegate bound to one candidate drop target in the shown list.
pub struct DestinationDropDelegate<'a> {
    pub(super) controller: &'a mut DragController,
    pub(super) target: DestinationId,
}

impl DropDelegate for DestinationDropDelegate<'_> {
    fn hover_entered(&mut self, model: &mut CustomizationModel) {
        self.controller.hover_entered_over(model, &self.target);
    }

    fn hover_exited(&mut self, _model: &mut CustomizationModel) {}

    fn drop_released(&mut self, _model: &mut CustomizationModel) -> bool {
        // Reordering already happened hover by hover; only the session needs
        // tearing down.
        self.controller.end_drag();
        true
    }

    fn proposed_operation(&self) -> DropOperation {
        DropOperation::Move
    }
}

/// Delegate bound to the entire reorderable-list region.
///
/// The host gesture system does not reliably signal drag termination when
/// the release lands outside any tracked entry, so the list-level delegate
/// tracks the pointer crossing the list bounds and catches drops into blank
/// list space.
pub struct ListDropDelegate<'a> {
    pub(super) controller: &'a mut DragController,
}

impl DropDelegate for ListDropDelegate<'_> {
    fn hover_entered(&mut self, _model: &mut CustomizationModel) {
        self.controller.set_hovering_list(true);
    }

    fn hover_exited(&mut self, _model: &mut CustomizationModel) {
        self.controller.set_hovering_list(false);
    }

    fn drop_released(&mut self, _model: &mut CustomizationModel) -> bool {
        self.controller.end_drag();
        true
    }

    fn proposed_operation(&self) -> DropOperation {
        DropOperation::Cancel
    }
}
