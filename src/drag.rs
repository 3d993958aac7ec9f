//! Drag-session state for the customization flow.
//!
//! The host toolkit owns gesture recognition; it forwards pointer callbacks
//! into the controller's delegates, and the controller applies every reorder
//! incrementally while the pointer hovers candidate targets. By the time a
//! drop is registered there is nothing left to commit.

mod controller;
mod delegates;

pub use controller::{DragController, DragSession};
pub use delegates::{DestinationDropDelegate, DropDelegate, DropOperation, ListDropDelegate};
