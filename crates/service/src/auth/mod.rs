//! Auth module: three-layer architecture (domain, repository, service)
//! plus a stateless token issuer/verifier.

pub mod domain;
pub mod errors;
pub mod repo;
pub mod repository;
pub mod service;
pub mod token;

pub use service::AuthService;
