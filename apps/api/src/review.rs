//! Content review stub.
//!
//! The bias/alignment panel in the UI is mock data by design: fixed scores
//! and feedback wired to a button press. There is no analysis algorithm to
//! run here, and this endpoint is labeled accordingly so nobody mistakes it
//! for one.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub bias_score: f64,
    pub alignment_score: f64,
    pub feedback: Vec<String>,
    /// Always "mock" — callers must not present these numbers as analysis.
    pub status: String,
}

/// POST /api/v1/content/review
pub async fn handle_review(
    Json(req): Json<ReviewRequest>,
) -> Result<Json<ReviewResponse>, AppError> {
    if req.content.trim().is_empty() {
        return Err(AppError::Validation("content must not be empty".to_string()));
    }
    Ok(Json(ReviewResponse {
        bias_score: 0.92,
        alignment_score: 0.88,
        feedback: vec![
            "Language is inclusive and balanced".to_string(),
            "Claims stay within the brand's stated positioning".to_string(),
            "Consider adding a source for the statistic in paragraph two".to_string(),
        ],
        status: "mock".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_review_returns_fixed_mock_scores() {
        let res = handle_review(Json(ReviewRequest {
            content: "Launch post draft".to_string(),
        }))
        .await
        .unwrap();
        assert_eq!(res.0.status, "mock");
        assert_eq!(res.0.bias_score, 0.92);
        assert_eq!(res.0.alignment_score, 0.88);
    }

    #[tokio::test]
    async fn test_review_rejects_empty_content() {
        let result = handle_review(Json(ReviewRequest {
            content: "  ".to_string(),
        }))
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
