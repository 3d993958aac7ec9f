//! Destination customization state model for an overflow menu.
//!
//! Hosts own the gesture recognition and rendering; this crate owns the
//! shown/hidden destination lists, the usage-ordering flag, and the drag
//! session that reorders destinations while the pointer hovers the list.
/// Destination identity and entry types.
pub mod destinations;
/// Drag-session controller and drop delegates.
pub mod drag;
/// Logging setup for embedding hosts.
pub mod logging;
/// Ordered shown/hidden lists plus the usage-ordering flag.
pub mod model;
