mod common;

use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;

use common::{Recorder, spawn_fixture, test_config};
use oxii::prelude::*;

const SAMPLE_BODY: &str = "Views: 5\nScrapes: 2\nCreated: 01/02/2023 10:00";

async fn analytics_for_link(
    State(recorder): State<Recorder>,
    Path(code): Path<String>,
) -> (StatusCode, String) {
    recorder.record(code);
    (StatusCode::OK, SAMPLE_BODY.to_string())
}

async fn analytics_without_created(
    State(recorder): State<Recorder>,
    Path(code): Path<String>,
) -> (StatusCode, String) {
    recorder.record(code);
    (StatusCode::OK, "Views: 5\nScrapes: 2".to_string())
}

async fn analytics_missing(
    State(recorder): State<Recorder>,
    Path(code): Path<String>,
) -> (StatusCode, String) {
    recorder.record(code);
    (StatusCode::NOT_FOUND, "No such link".to_string())
}

async fn service_with(recorder: Recorder, router: Router<Recorder>) -> (AnalyticsService, String) {
    let addr = spawn_fixture(router.with_state(recorder)).await;
    let service = AnalyticsService::new(Arc::new(ApiClient::new(test_config(addr)).unwrap()));
    (service, format!("http://{addr}"))
}

#[tokio::test]
async fn test_lookup_decodes_the_named_fields() {
    let recorder = Recorder::default();
    let router = Router::new().route("/a/s/{code}", get(analytics_for_link));
    let (service, base) = service_with(recorder.clone(), router).await;

    let target = format!("{base}/s/abc");
    let report = service.lookup(&target).await.unwrap();

    assert_eq!(report.link, target);
    assert_eq!(report.analytics.views, 5);
    assert_eq!(report.analytics.scrapes, 2);
    assert_eq!(report.analytics.created_display(), "01/02/2023 10:00");
    assert_eq!(recorder.hits(), 1);
}

#[tokio::test]
async fn test_bare_codes_resolve_against_the_base_url() {
    let recorder = Recorder::default();
    let router = Router::new().route("/a/{code}", get(analytics_for_link));
    let (service, base) = service_with(recorder.clone(), router).await;

    let report = service.lookup("abc").await.unwrap();

    assert_eq!(report.link, format!("{base}/abc"));
    assert_eq!(recorder.bodies(), vec!["abc".to_string()]);
}

#[tokio::test]
async fn test_undecodable_bodies_are_decode_errors() {
    let recorder = Recorder::default();
    let router = Router::new().route("/a/{code}", get(analytics_without_created));
    let (service, _base) = service_with(recorder.clone(), router).await;

    let err = service.lookup("abc").await.unwrap_err();

    assert!(matches!(err, ClientError::Analytics { .. }));
    assert_eq!(recorder.hits(), 1);
}

#[tokio::test]
async fn test_unknown_links_surface_the_error_body() {
    let recorder = Recorder::default();
    let router = Router::new().route("/a/{code}", get(analytics_missing));
    let (service, _base) = service_with(recorder.clone(), router).await;

    let err = service.lookup("zzz").await.unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(message, "No such link");
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_foreign_links_issue_no_request() {
    let recorder = Recorder::default();
    let router = Router::new().route("/a/{code}", get(analytics_for_link));
    let (service, _base) = service_with(recorder.clone(), router).await;

    for raw in ["https://elsewhere.test/s/abc", "not a link", "abcd"] {
        let err = service.lookup(raw).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation { .. }), "{raw}");
    }

    assert_eq!(recorder.hits(), 0);
}
