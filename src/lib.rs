//! Darwin DAT - Draft model and generation client for technical
//! architecture files (DAT).
//!
//! A wizard collects the document as one in-memory draft of scalar fields
//! and ordered row collections, then submits it to a rendering backend for
//! download (docx, pdf, odt) or inline PDF preview.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
