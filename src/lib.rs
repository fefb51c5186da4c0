//! Ink and Feather Upload Client
//!
//! A headless client for submitting images of handwritten documents to the
//! Ink and Feather processing webhook. The webhook performs the OCR work and
//! replies to the user by email; this crate only validates, packages and
//! hands the payload over.
//!
//! ## Features
//!
//! - **Upload controller**: file acquisition (picker or drop), validation,
//!   contact capture and a single-flight submission state machine
//! - **Webhook delivery**: one multipart POST per submission, no retries
//! - **CLI front**: drive the controller from a terminal
//!
//! The controller is rendering-agnostic: any front can display
//! [`models::SubmissionStatus`] and call the
//! [`controller::UploadController`] entry points from its own event loop.

pub mod acquire;
pub mod config;
pub mod controller;
pub mod models;
pub mod validation;
pub mod webhook;
