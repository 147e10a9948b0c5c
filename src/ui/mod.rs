/// UI widgets
///
/// - `drop_zone.rs` - the click/drop target and its status line

pub mod drop_zone;

pub use drop_zone::Status;
