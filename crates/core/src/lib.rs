//! # Hale Core
//!
//! Domain logic for the Hale health self-assessment platform:
//! - Assessment form controller (wizard state, answer accumulation)
//! - Scoring engine (answers in, scored result record out)
//! - Dashboard presenter (derived display values, degraded rendering)
//! - Chatbot rule engine (keyword matching, canned replies)
//!
//! **No API concerns**: HTTP servers, clients, and auth belong in
//! `api-rest`, `hale-client`, and `api-shared`.

pub mod assessment;
pub mod chatbot;
pub mod dashboard;
pub mod error;
pub mod scoring;

// Wire types double as the in-memory model; the two sides of the API
// communicate only through these shapes.
pub use api_shared::model;

pub use assessment::AssessmentForm;
pub use dashboard::{DashboardState, DashboardView, HealthStatus};
pub use error::{AnswersError, AnswersResult};
