//! HTTP request handlers for the vendor endpoint.
//!
//! - [`list`] - List every vendor
//! - [`read`] - Read a vendor by id
//! - [`create`] - Create a vendor
//! - [`update`] - Replace a vendor
//! - [`patch`] - Partially update a vendor
//! - [`delete`] - Delete a vendor
//! - [`health`] - Health, liveness and readiness probes

pub mod create;
pub mod delete;
pub mod health;
pub mod list;
pub mod patch;
pub mod read;
pub mod update;

// Re-export handlers for convenience
pub use create::create_handler;
pub use delete::delete_handler;
pub use health::health_handler;
pub use list::list_handler;
pub use patch::patch_handler;
pub use read::read_handler;
pub use update::update_handler;
