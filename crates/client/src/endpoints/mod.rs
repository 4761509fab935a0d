//! REST API endpoint implementations.
//!
//! Each function issues exactly one request and returns the decoded body.
//! Non-success statuses surface as [`crate::ClientError::ApiError`]; callers
//! decide which of them (such as 404) are benign.

mod cluster;
mod indices;
mod request;
mod search;
mod templates;

pub use cluster::get_cluster_health;
pub use indices::cat_indices;
pub use request::send_request;
pub use search::search;
pub use templates::list_index_templates;
