//! Shared library for the events service.
//!
//! This crate provides the pieces common to both transports: configuration,
//! database access, the event repository, request sanitization/validation,
//! and the transport-agnostic request router.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod repository;
pub mod router;
pub mod sanitize;
pub mod validate;

pub use config::Config;
pub use error::{Error, Result};
pub use models::{CreateEventRequest, Event, EventPatch, NewEvent, UpdateEventRequest};
pub use repository::{EventRepository, EventStore};
pub use router::{dispatch, EnvelopeRequest, EnvelopeResponse};
pub use validate::FieldError;
