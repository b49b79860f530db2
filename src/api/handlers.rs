//! API handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::AppState;
use crate::error::{ApiError, Error};
use crate::types::{Article, Variant};

pub const WELCOME_MESSAGE: &str = "Bienvenue sur l'API DevOps";

/// Diagnostic returned by the faulty variant
pub const FAULTY_DETAIL: &str = "Erreur intentionnelle pour démonstration TP4";

/// Welcome message
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// List every article in catalog order
pub async fn list_articles(State(state): State<AppState>) -> Result<Json<Vec<Article>>, ApiError> {
    match state.variant {
        Variant::Healthy => Ok(Json(state.catalog.articles().to_vec())),
        Variant::Faulty => {
            tracing::error!(variant = %state.variant, "Injected failure on /articles");
            Err(Error::internal(FAULTY_DETAIL).into())
        }
    }
}

/// Catch-all for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::not_found("Not Found")
}
