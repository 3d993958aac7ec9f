use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::destinations::{Destination, DestinationId};

/// Mutation notice delivered to the host after each model change.
///
/// The host's rendering layer is an external collaborator; it subscribes via
/// [`CustomizationModel::set_observer`] and re-renders on each event instead
/// of polling the lists.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelEvent {
    /// The shown list was spliced into a new order.
    OrderChanged,
    /// A destination moved between the shown and hidden lists.
    VisibilityChanged { id: DestinationId, shown: bool },
    /// The automatic usage-based ordering flag flipped.
    UsageOrderingChanged { enabled: bool },
}

type Observer = Box<dyn FnMut(&ModelEvent)>;

/// Serializable ordering snapshot for hosts that persist menu layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomizationSnapshot {
    pub shown: Vec<DestinationId>,
    pub hidden: Vec<DestinationId>,
    pub usage_ordering_enabled: bool,
}

/// Ordered shown/hidden destination lists plus the usage-ordering flag.
///
/// The model owns the entries for the lifetime of the customization flow.
/// Collaborators address entries by [`DestinationId`] and resolve indices
/// freshly on every event; indices are never handed out for retention.
pub struct CustomizationModel {
    shown: Vec<Destination>,
    hidden: Vec<Destination>,
    usage_ordering_enabled: bool,
    observer: Option<Observer>,
}

impl std::fmt::Debug for CustomizationModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomizationModel")
            .field("shown", &self.shown)
            .field("hidden", &self.hidden)
            .field("usage_ordering_enabled", &self.usage_ordering_enabled)
            .finish_non_exhaustive()
    }
}

impl CustomizationModel {
    /// Build a model from the host's current menu layout.
    ///
    /// Each entry's `shown` flag is normalized to match the list it arrived
    /// in, so callers don't have to pre-set it.
    pub fn new(
        mut shown: Vec<Destination>,
        mut hidden: Vec<Destination>,
        usage_ordering_enabled: bool,
    ) -> Self {
        for destination in &mut shown {
            destination.shown = true;
        }
        for destination in &mut hidden {
            destination.shown = false;
        }
        Self {
            shown,
            hidden,
            usage_ordering_enabled,
            observer: None,
        }
    }

    /// Currently visible destinations, in menu order.
    pub fn shown(&self) -> &[Destination] {
        &self.shown
    }

    /// Destinations hidden from the menu, in section order.
    pub fn hidden(&self) -> &[Destination] {
        &self.hidden
    }

    /// True while automatic usage-based ordering is active.
    pub fn usage_ordering_enabled(&self) -> bool {
        self.usage_ordering_enabled
    }

    /// Register the host callback invoked after every mutation.
    pub fn set_observer(&mut self, observer: impl FnMut(&ModelEvent) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Position of a destination in the shown list, if present.
    pub fn shown_index_of(&self, id: &DestinationId) -> Option<usize> {
        self.shown.iter().position(|d| &d.id == id)
    }

    /// Look up a destination in either list.
    pub fn destination(&self, id: &DestinationId) -> Option<&Destination> {
        self.shown
            .iter()
            .chain(self.hidden.iter())
            .find(|d| &d.id == id)
    }

    /// Set the usage-ordering flag, notifying the host on transitions.
    pub fn set_usage_ordering_enabled(&mut self, enabled: bool) {
        if self.usage_ordering_enabled == enabled {
            return;
        }
        self.usage_ordering_enabled = enabled;
        debug!(enabled, "usage ordering flag changed");
        self.notify(ModelEvent::UsageOrderingChanged { enabled });
    }

    /// Splice-move the shown entry at `from` to the position at `to`.
    ///
    /// Both indices are measured before the removal. Inserting at the
    /// target's pre-removal index lands the entry immediately after the
    /// target when moving forward and exactly at the target's position when
    /// moving backward; all intervening entries shift by one.
    pub fn move_shown(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= self.shown.len() || to >= self.shown.len() {
            return false;
        }
        let destination = self.shown.remove(from);
        self.shown.insert(to, destination);
        self.notify(ModelEvent::OrderChanged);
        true
    }

    /// Move a destination from the shown list into the hidden section.
    pub fn hide(&mut self, id: &DestinationId) -> bool {
        match self.shown_index_of(id) {
            Some(index) => self.hide_at(index),
            None => false,
        }
    }

    /// Hide the shown entry at `index`. Newly hidden entries surface at the
    /// top of the hidden section.
    pub fn hide_at(&mut self, index: usize) -> bool {
        if index >= self.shown.len() {
            return false;
        }
        let mut destination = self.shown.remove(index);
        destination.shown = false;
        let id = destination.id.clone();
        self.hidden.insert(0, destination);
        self.notify(ModelEvent::VisibilityChanged { id, shown: false });
        true
    }

    /// Move a destination from the hidden section back to the end of the
    /// shown list.
    pub fn show(&mut self, id: &DestinationId) -> bool {
        let Some(index) = self.hidden.iter().position(|d| &d.id == id) else {
            return false;
        };
        let mut destination = self.hidden.remove(index);
        destination.shown = true;
        let id = destination.id.clone();
        self.shown.push(destination);
        self.notify(ModelEvent::VisibilityChanged { id, shown: true });
        true
    }

    /// Capture the current ordering for persistence by the host.
    pub fn snapshot(&self) -> CustomizationSnapshot {
        CustomizationSnapshot {
            shown: self.shown.iter().map(|d| d.id.clone()).collect(),
            hidden: self.hidden.iter().map(|d| d.id.clone()).collect(),
            usage_ordering_enabled: self.usage_ordering_enabled,
        }
    }

    fn notify(&mut self, event: ModelEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn model_with(titles: &[&str]) -> CustomizationModel {
        let shown = titles.iter().map(|title| Destination::new(*title)).collect();
        CustomizationModel::new(shown, Vec::new(), true)
    }

    fn shown_titles(model: &CustomizationModel) -> Vec<String> {
        model.shown().iter().map(|d| d.title.clone()).collect()
    }

    #[test]
    fn new_normalizes_shown_flags_to_list_membership() {
        let mut stray = Destination::new("hidden-one");
        stray.shown = true;
        let model = CustomizationModel::new(vec![], vec![stray], false);
        assert!(!model.hidden()[0].shown);
    }

    #[test]
    fn move_forward_splices_instead_of_swapping() {
        let mut model = model_with(&["a", "b", "c", "d"]);
        assert!(model.move_shown(0, 2));
        assert_eq!(shown_titles(&model), ["b", "c", "a", "d"]);
    }

    #[test]
    fn move_backward_lands_at_target_position() {
        let mut model = model_with(&["a", "b", "c", "d"]);
        assert!(model.move_shown(3, 1));
        assert_eq!(shown_titles(&model), ["a", "d", "b", "c"]);
    }

    #[test]
    fn move_to_same_or_out_of_range_index_is_rejected() {
        let mut model = model_with(&["a", "b"]);
        assert!(!model.move_shown(1, 1));
        assert!(!model.move_shown(2, 0));
        assert!(!model.move_shown(0, 2));
        assert_eq!(shown_titles(&model), ["a", "b"]);
    }

    #[test]
    fn hide_moves_entry_to_top_of_hidden_section() {
        let mut model = model_with(&["a", "b", "c"]);
        let b = model.shown()[1].id.clone();
        let c = model.shown()[2].id.clone();
        assert!(model.hide(&c));
        assert!(model.hide(&b));
        assert_eq!(shown_titles(&model), ["a"]);
        assert_eq!(model.hidden()[0].title, "b");
        assert_eq!(model.hidden()[1].title, "c");
        assert!(model.hidden().iter().all(|d| !d.shown));
    }

    #[test]
    fn show_appends_to_end_of_shown_list() {
        let mut model = model_with(&["a", "b"]);
        let a = model.shown()[0].id.clone();
        assert!(model.hide(&a));
        assert!(model.show(&a));
        assert_eq!(shown_titles(&model), ["b", "a"]);
        assert!(model.shown()[1].shown);
    }

    #[test]
    fn hide_and_show_report_absent_entries() {
        let mut model = model_with(&["a"]);
        let unknown = DestinationId::new();
        assert!(!model.hide(&unknown));
        assert!(!model.show(&unknown));
        assert!(!model.hide_at(5));
    }

    #[test]
    fn observer_sees_one_event_per_mutation() {
        let events: Rc<RefCell<Vec<ModelEvent>>> = Rc::default();
        let mut model = model_with(&["a", "b"]);
        let sink = Rc::clone(&events);
        model.set_observer(move |event| sink.borrow_mut().push(event.clone()));

        model.move_shown(0, 1);
        model.set_usage_ordering_enabled(false);
        model.set_usage_ordering_enabled(false);
        let a = model.shown()[1].id.clone();
        model.hide(&a);

        let events = events.borrow();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], ModelEvent::OrderChanged);
        assert_eq!(
            events[1],
            ModelEvent::UsageOrderingChanged { enabled: false }
        );
        assert_eq!(
            events[2],
            ModelEvent::VisibilityChanged {
                id: a,
                shown: false
            }
        );
    }

    #[test]
    fn snapshot_round_trips_through_serde() {
        let mut model = model_with(&["a", "b", "c"]);
        let c = model.shown()[2].id.clone();
        model.hide(&c);
        model.set_usage_ordering_enabled(false);

        let snapshot = model.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: CustomizationSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, snapshot);
        assert_eq!(restored.shown.len(), 2);
        assert_eq!(restored.hidden, vec![c]);
        assert!(!restored.usage_ordering_enabled);
    }
}
