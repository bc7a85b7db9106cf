//! Data transfer objects for API communication.
//!
//! Request and response types for the prediction API, serializable via
//! `serde`. These types bridge the gap between the Rust domain model and
//! JSON payloads, and are shared by the server and the browser client so
//! both sides agree on the wire shape.
mod request;
mod response;

pub use request::*;
pub use response::*;
