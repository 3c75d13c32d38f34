//! # Enroll Core
//!
//! The domain layer of the Enroll registration service.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;
pub mod validation;

pub use error::RegistrationError;
pub use service::RegistrationService;
