//! End-to-end tests for the pathway service and the career wizard.
//!
//! Each test spins up an Axum server on a random port and drives a
//! `CareerWizard` through the real HTTP gateway.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::time::timeout;

use nextwave::catalog::DegreeLevel;
use nextwave::error::GenerationError;
use nextwave::pathway::{
    AssociatesSection, FALLBACK_ROADMAP, HttpPathwayGateway, PathwayGateway, PathwayResult,
};
use nextwave::service::{PathwayGenerator, PathwayRouteState, PathwayService, pathway_routes};
use nextwave::wizard::{Advance, CareerStep, CareerWizard, RoadmapView};

/// Maximum time any test is allowed to run before we consider it hung.
const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Stub generator for integration tests (no real API calls).
struct StubGenerator {
    calls: AtomicUsize,
    fail: bool,
}

#[async_trait]
impl PathwayGenerator for StubGenerator {
    async fn generate(
        &self,
        career: &str,
        degree_level: DegreeLevel,
    ) -> Result<PathwayResult, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(GenerationError::InvalidResponse {
                provider: "stub".to_string(),
                reason: "empty reply".to_string(),
            });
        }
        Ok(PathwayResult {
            career: Some(career.to_string()),
            degree_level: Some(degree_level.to_string()),
            associates: Some(AssociatesSection {
                programs: vec!["AS Computer Programming".to_string()],
                duration: "2 years".to_string(),
                key_courses: vec!["Java I".to_string()],
            }),
            internships: Some(vec!["Campus help desk".to_string()]),
            ..Default::default()
        })
    }
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    format!("http://127.0.0.1:{port}/pathway")
}

/// Start the pathway service on a random port, return (endpoint, generator).
async fn start_service(fail: bool) -> (String, Arc<StubGenerator>) {
    let generator = Arc::new(StubGenerator {
        calls: AtomicUsize::new(0),
        fail,
    });
    let service = PathwayService::new(Some(generator.clone() as Arc<dyn PathwayGenerator>));
    let app = pathway_routes(PathwayRouteState {
        service: Arc::new(service),
    });
    (serve(app).await, generator)
}

fn wizard(endpoint: &str) -> CareerWizard {
    let gateway = HttpPathwayGateway::new(endpoint, Duration::from_secs(2)).unwrap();
    CareerWizard::open(Arc::new(gateway) as Arc<dyn PathwayGateway>, None)
}

async fn walk_to_roadmap(wizard: &CareerWizard, career: &str) -> Advance<CareerStep> {
    wizard.set_field("career", career).await.unwrap();
    assert_eq!(wizard.advance().await, Advance::Moved(CareerStep::SelectDegree));
    wizard.set_degree(DegreeLevel::Associate).await.unwrap();
    wizard.advance().await
}

#[tokio::test]
async fn wizard_shows_generated_roadmap() {
    timeout(TEST_TIMEOUT, async {
        let (endpoint, generator) = start_service(false).await;
        let wizard = wizard(&endpoint);

        let outcome = walk_to_roadmap(&wizard, "Software Developer").await;
        assert_eq!(outcome, Advance::Moved(CareerStep::Roadmap));

        let snapshot = wizard.snapshot().await;
        assert!(!snapshot.loading);
        assert!(snapshot.error.is_none());
        let Some(RoadmapView::Generated(pathway)) = snapshot.roadmap else {
            panic!("expected generated roadmap");
        };
        assert_eq!(pathway.career.as_deref(), Some("Software Developer"));
        assert_eq!(pathway.internships(), ["Campus help desk"]);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn repeat_request_hits_service_cache() {
    timeout(TEST_TIMEOUT, async {
        let (endpoint, generator) = start_service(false).await;

        for _ in 0..2 {
            let wizard = wizard(&endpoint);
            walk_to_roadmap(&wizard, "Web Developer").await;
            assert!(matches!(
                wizard.roadmap().await,
                Some(RoadmapView::Generated(_))
            ));
        }
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);

        let body: serde_json::Value = reqwest::Client::new()
            .post(&endpoint)
            .json(&serde_json::json!({"career": "web developer"}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["cached"], true);
        assert_eq!(body["career"], "web developer");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn generation_failure_yields_server_fallback() {
    timeout(TEST_TIMEOUT, async {
        let (endpoint, _) = start_service(true).await;
        let wizard = wizard(&endpoint);

        walk_to_roadmap(&wizard, "Nurse").await;

        let Some(RoadmapView::Generated(pathway)) = wizard.roadmap().await else {
            panic!("expected the server fallback pathway");
        };
        assert_eq!(
            pathway,
            PathwayResult::server_fallback("Nurse", DegreeLevel::Associate)
        );
        assert!(wizard.error().await.is_none());
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn server_error_shows_fixed_roadmap() {
    timeout(TEST_TIMEOUT, async {
        let app = Router::new().route(
            "/pathway",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let endpoint = serve(app).await;
        let wizard = wizard(&endpoint);

        let outcome = walk_to_roadmap(&wizard, "Data Analyst").await;
        assert_eq!(outcome, Advance::Moved(CareerStep::Roadmap));

        let roadmap = wizard.roadmap().await.unwrap();
        assert_eq!(roadmap, RoadmapView::Fallback);
        assert_eq!(roadmap.fallback_stages(), Some(&FALLBACK_ROADMAP[..]));
        assert_eq!(
            wizard.error().await.as_deref(),
            Some("API error: Internal Server Error")
        );
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn undecodable_success_body_shows_fixed_roadmap() {
    timeout(TEST_TIMEOUT, async {
        let app = Router::new().route("/pathway", post(|| async { (StatusCode::OK, "not json") }));
        let endpoint = serve(app).await;
        let wizard = wizard(&endpoint);

        let outcome = walk_to_roadmap(&wizard, "Cloud Engineer").await;
        assert_eq!(outcome, Advance::Moved(CareerStep::Roadmap));

        let snapshot = wizard.snapshot().await;
        assert!(!snapshot.loading);
        assert_eq!(snapshot.roadmap, Some(RoadmapView::Fallback));
        let error = snapshot.error.expect("decode failure is reported");
        assert!(error.starts_with("Invalid pathway response:"), "{error}");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn unnamed_status_code_is_reported_by_number() {
    timeout(TEST_TIMEOUT, async {
        let app = Router::new().route(
            "/pathway",
            post(|| async { StatusCode::from_u16(599).unwrap() }),
        );
        let endpoint = serve(app).await;
        let wizard = wizard(&endpoint);

        walk_to_roadmap(&wizard, "Web Developer").await;

        assert_eq!(wizard.roadmap().await, Some(RoadmapView::Fallback));
        assert_eq!(wizard.error().await.as_deref(), Some("API error: 599"));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn bad_request_never_reaches_generator() {
    timeout(TEST_TIMEOUT, async {
        let (endpoint, generator) = start_service(false).await;

        let response = reqwest::Client::new()
            .post(&endpoint)
            .json(&serde_json::json!({"career": "", "degreeLevel": "associate"}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Career field is required");
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    })
    .await
    .expect("test timed out");
}
