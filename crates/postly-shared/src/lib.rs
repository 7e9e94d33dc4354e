//! # Postly Shared
//!
//! Request and response types shared between the API server and front-end.

pub mod dto;
pub mod response;

pub use response::{ErrorBody, Paginated, Pagination};
