//! Infrastructure services

mod fallback_service;

pub use fallback_service::FallbackService;
