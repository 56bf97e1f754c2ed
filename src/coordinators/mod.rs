// Coordinators layer - Workflow orchestration
//
// Coordinators sequence provider checks and store calls for one API operation
// and own the transaction boundaries. Access checks always run before any
// store call.

pub mod auth_coordinator;
pub mod catalog_coordinator;
pub mod space_coordinator;
pub mod user_coordinator;

pub use auth_coordinator::AuthCoordinator;
pub use catalog_coordinator::CatalogCoordinator;
pub use space_coordinator::{SpaceCoordinator, SpaceView};
pub use user_coordinator::UserCoordinator;
