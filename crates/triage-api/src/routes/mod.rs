//! API Routes

pub mod symptoms;
pub mod triage;
