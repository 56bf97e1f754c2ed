pub mod auth;
pub mod context;
pub mod dimensions;
pub mod placement;

pub use auth::{Claims, Role};
pub use context::{RequestContext, RequestId, RequestSource};
pub use dimensions::Dimensions;
pub use placement::Placement;
