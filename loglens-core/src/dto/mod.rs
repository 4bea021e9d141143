//! Data transfer objects for the service API
//!
//! One module per API group, mirroring the endpoint layout.

pub mod analysis;
pub mod auth;
pub mod log;
