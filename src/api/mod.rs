//! The API layer: response envelope, dispatcher, handlers and routing.

pub mod dispatch;
pub mod envelope;
pub mod handlers;
pub mod router;

pub use dispatch::{HandlerResult, dispatch};
pub use envelope::{error_response, write_json};
pub use router::{RouterConfig, create_router, create_router_with_config};
