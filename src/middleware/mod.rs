// ABOUTME: HTTP middleware for request tracing, correlation ids and CORS
// ABOUTME: Layers applied around every router by the server module

/// Cross-origin policy
pub mod cors;
/// Request ids and spans
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing and correlation
pub use self::tracing::{
    create_request_span, propagate_request_id_layer, set_request_id_layer, MakeRequestUuid,
    REQUEST_ID_HEADER,
};
