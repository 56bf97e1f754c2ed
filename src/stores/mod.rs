// Stores layer - Data access
//
// Stores take the connection per call so a coordinator can run several store
// operations inside one transaction.
pub mod catalog_store;
pub mod space_store;
pub mod user_store;

pub use catalog_store::CatalogStore;
pub use space_store::SpaceStore;
pub use user_store::{UserForAuth, UserStore};

/// Rows per multi-row INSERT and ids per IN list.
///
/// SQLite caps bound parameters at 32766 per statement; at six columns a row
/// this stays well below it.
pub(crate) const BULK_CHUNK_SIZE: usize = 500;
