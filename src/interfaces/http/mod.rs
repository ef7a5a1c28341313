//! HTTP REST API interfaces
//!
//! - `common`: response envelopes, error mapping, validated JSON extractor
//! - `middleware`: bearer-token guard (access / refresh)
//! - `modules`: DTOs and handlers per resource
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod middleware;
pub mod modules;
pub mod router;

pub use router::create_api_router;
