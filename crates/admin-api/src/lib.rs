//! Typed request pipeline for the RusToK admin backend.
//!
//! Every backend call goes through [`ApiClient::execute`], which posts a
//! GraphQL operation to the single query endpoint, attaches the bearer
//! token and tenant scope header when present, and normalizes every
//! possible failure into exactly one [`ApiError`].

mod client;
mod error;
mod request;

pub use client::{ApiClient, TENANT_HEADER};
pub use error::{ApiError, ApiResult};
pub use request::{GraphqlErrorEntry, GraphqlErrorExtensions, GraphqlRequest, GraphqlResponse};
