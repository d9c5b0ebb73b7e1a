//! HTTP handlers for the REST surface.
//!
//! Handlers are thin: extract, delegate to a service, map the result.

pub mod chat;
