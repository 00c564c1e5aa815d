//! Symptom Routes

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use triage_kb::{Symptom, DISCLAIMER};

use crate::AppState;

/// Response for the symptoms endpoint
#[derive(Debug, Serialize)]
pub struct SymptomsResponse {
    pub data: Vec<Symptom>,
    pub count: usize,
    pub disclaimer: &'static str,
}

/// List the symptom vocabulary in menu order
pub async fn list_symptoms(State(state): State<Arc<AppState>>) -> Json<SymptomsResponse> {
    let data = state.catalog.all_symptoms().to_vec();

    Json(SymptomsResponse {
        count: data.len(),
        data,
        disclaimer: DISCLAIMER,
    })
}
