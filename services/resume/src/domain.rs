// Domain layer modules
pub mod handler_response;
pub mod request_event;

// Re-exports
pub use handler_response::{default_headers, ErrorBody, HandlerResponse, SuccessBody};
pub use request_event::RequestEvent;
