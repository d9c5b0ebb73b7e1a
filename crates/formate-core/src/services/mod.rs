//! Core services: thin orchestrators over the ports.
//!
//! Each service takes its collaborators as constructor parameters; wiring
//! happens once in the adapter's composition root.

pub mod chat_relay;
pub mod pdf_format_service;

pub use chat_relay::ChatRelayService;
pub use pdf_format_service::PdfFormatService;
