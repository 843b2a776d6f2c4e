//! Placeholder inspection endpoint.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::variables;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub variables: Vec<String>,
}

/// POST /api/v1/variables/extract - Placeholder names in a piece of text
#[tracing::instrument(name = "http.extract_variables", skip(request))]
pub async fn extract_variables(Json(request): Json<ExtractRequest>) -> Json<ExtractResponse> {
    let variables = variables::extract_variables(&request.text)
        .into_iter()
        .collect();

    Json(ExtractResponse { variables })
}
