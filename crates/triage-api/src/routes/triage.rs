//! Triage Routes

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use metrics::counter;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use triage_engine::{run_triage_with_catalog, TriageError, TriageReport};

use crate::{ApiError, AppState};

/// Request body for the triage endpoint
#[derive(Debug, Deserialize)]
pub struct TriageRequest {
    #[serde(default)]
    pub symptoms: Vec<String>,
}

/// Response for the triage endpoint
#[derive(Debug, Serialize)]
pub struct TriageResponse {
    #[serde(flatten)]
    pub report: TriageReport,
    pub recommended_action: &'static str,
    pub assessed_at: DateTime<Utc>,
}

/// Assess a symptom list; each request gets its own engine
pub async fn assess(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TriageRequest>,
) -> Result<Json<TriageResponse>, ApiError> {
    let report = run_triage_with_catalog(state.catalog.clone(), request.symptoms.as_slice())
        .inspect_err(|e| {
            if let TriageError::UnknownSymptom(_) = e {
                counter!("triage_unknown_symptom_total").increment(1);
            }
        })?;

    counter!("triage_evaluations_total", "tier" => report.level.as_str()).increment(1);
    info!(
        "Triage assessed: {} symptoms -> {}",
        report.symptoms.len(),
        report.level
    );

    Ok(Json(TriageResponse {
        recommended_action: report.recommended_action(),
        report,
        assessed_at: Utc::now(),
    }))
}
