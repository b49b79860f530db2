//! The faulty variant must break `/articles` and nothing else

mod common;

use articles_api::api::{create_router, handlers::FAULTY_DETAIL, AppState};
use articles_api::catalog::Catalog;
use articles_api::types::Variant;
use axum::http::StatusCode;
use common::get;

#[tokio::test]
async fn articles_fails_with_fixed_detail() {
    let app = create_router(AppState::faulty().unwrap());

    for _ in 0..3 {
        let response = get(&app, "/articles").await;
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.content_type.as_deref(), Some("application/json"));
        assert_eq!(
            response.body["detail"],
            "Erreur intentionnelle pour démonstration TP4"
        );
        assert_eq!(response.body["detail"], FAULTY_DETAIL);
    }
}

#[tokio::test]
async fn root_still_succeeds() {
    let app = create_router(AppState::new(Catalog::reference().unwrap(), Variant::Faulty));

    let response = get(&app, "/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Bienvenue sur l'API DevOps");
}

#[tokio::test]
async fn query_string_does_not_change_outcome() {
    let app = create_router(AppState::faulty().unwrap());

    let response = get(&app, "/articles?page=2").await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["detail"], FAULTY_DETAIL);
}
