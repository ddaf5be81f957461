//! # API Shared
//!
//! Types and utilities shared between the REST server and HTTP client:
//! - Wire types for the assessment API (JSON bodies, camelCase keys)
//! - Bearer-token validation
//! - Health check payload
//!
//! No transport concerns live here; axum and reqwest specifics belong in
//! `api-rest` and `hale-client`.

pub mod auth;
pub mod health;
pub mod model;

pub use auth::{validate_bearer, AuthError};
pub use health::HealthService;
pub use model::{
    AssessmentAnswers, ChatReq, ChatRes, Checkup, DietPlan, HealthAssessment, HealthRes,
    Recommendations, ResultRecord, UserProfile,
};
