//! REST endpoint handlers.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::WebState;
use shotplan::{
    CatalogResponse, Course, ErrorResponse, InputChange, SessionSnapshot, ShotError, ShotInputs,
    ShotPlan,
};

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

/// A planning failure rendered as `400 { kind, error }`.
pub struct ApiError(pub ShotError);

impl From<ShotError> for ApiError {
    fn from(err: ShotError) -> Self {
        Self(err)
    }
}

/// Undecodable bodies are client errors too. A catalog miss inside the body
/// still reports as `unknown_profile`.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(ShotError::from_decode_message(&rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!("rejecting request: {}", self.0);
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::from(&self.0))).into_response()
    }
}

// ---------------------------------------------------------------------------
// REST API
// ---------------------------------------------------------------------------

/// GET /api/catalog
pub async fn get_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse::current())
}

/// GET /api/course: 404 when no course file is configured.
pub async fn get_course(State(state): State<Arc<WebState>>) -> Result<Json<Course>, StatusCode> {
    state
        .root
        .course()
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// POST /api/plan: stateless one-shot planning.
pub async fn post_plan(
    State(state): State<Arc<WebState>>,
    body: Result<Json<ShotInputs>, JsonRejection>,
) -> Result<Json<ShotPlan>, ApiError> {
    let Json(inputs) = body?;
    let plan = shotplan::plan(&inputs, state.root.session.model())?;
    Ok(Json(plan))
}

/// GET /api/session: 204 until the session has its first shot.
pub async fn get_session(State(state): State<Arc<WebState>>) -> Response {
    match state.root.session.snapshot() {
        Some(snapshot) => Json(snapshot).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// POST /api/session: apply one input change and return the new snapshot.
pub async fn post_session(
    State(state): State<Arc<WebState>>,
    body: Result<Json<InputChange>, JsonRejection>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let Json(change) = body?;
    let snapshot = state.root.session.apply(&change)?;
    Ok(Json(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU64;

    use axum::body::Body;
    use axum::http::{Method, Request, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::state::AppState;
    use crate::state::config::ShotplanConfig;

    const SAMPLE_COURSE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../courses/sample.toml");

    fn app(config: ShotplanConfig) -> axum::Router {
        let state = Arc::new(WebState {
            root: Arc::new(AppState::new(config).unwrap()),
            ws_count: AtomicU64::new(0),
        });
        crate::web::router(state)
    }

    fn post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn send(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn inputs(club: &str) -> Value {
        json!({
            "player": {"latitude": 36.3188, "longitude": -78.3843},
            "target": {"latitude": 36.3226, "longitude": -78.3843},
            "wind": {"speed_mph": 10.0, "bearing_deg": 0.0},
            "club": club,
        })
    }

    #[test]
    fn shot_errors_map_to_bad_request() {
        let resp = ApiError::from(ShotError::InvalidCoordinate {
            latitude: 91.0,
            longitude: 0.0,
        })
        .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn plan_returns_wind_adjusted_carry() {
        let app = app(ShotplanConfig::default());
        let (status, body) = send(&app, post("/api/plan", inputs("dr"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["carry_yards"], 247);
        assert_eq!(body["inputs"]["club"], "DR");
    }

    #[tokio::test]
    async fn plan_rejects_unknown_club_as_unknown_profile() {
        let app = app(ShotplanConfig::default());
        let (status, body) = send(&app, post("/api/plan", inputs("PT"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "unknown_profile");
        assert_eq!(body["error"], "unknown club 'PT'");
    }

    #[tokio::test]
    async fn plan_rejects_bad_coordinates_and_malformed_bodies() {
        let app = app(ShotplanConfig::default());
        let mut bad = inputs("DR");
        bad["player"]["latitude"] = json!(91.0);
        let (status, body) = send(&app, post("/api/plan", bad)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "invalid_coordinate");

        let (status, body) = send(&app, post("/api/plan", json!({"club": "DR"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "invalid_input");
    }

    #[tokio::test]
    async fn session_starts_empty_then_commits_and_rejects() {
        let app = app(ShotplanConfig::default());
        let (status, _) = send(&app, get("/api/session")).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let early = json!({"type": "set_club", "club": "7I"});
        let (status, body) = send(&app, post("/api/session", early)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "invalid_input");

        let replace = json!({"type": "replace", "inputs": inputs("DR")});
        let (status, body) = send(&app, post("/api/session", replace)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["revision"], 1);

        let bad_shape = json!({"type": "set_shape", "shape": "knuckleball"});
        let (status, body) = send(&app, post("/api/session", bad_shape)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "unknown_profile");

        let (status, body) = send(&app, get("/api/session")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["revision"], 1);
        assert_eq!(body["plan"]["result"]["carry_yards"], 247);
    }

    #[tokio::test]
    async fn course_is_404_until_configured() {
        let (status, _) = send(&app(ShotplanConfig::default()), get("/api/course")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let config = ShotplanConfig {
            course: Some(SAMPLE_COURSE.into()),
            ..ShotplanConfig::default()
        };
        let (status, body) = send(&app(config), get("/api/course")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["holes"].as_array().map(Vec::len), Some(4));
    }

    #[tokio::test]
    async fn catalog_lists_clubs() {
        let (status, body) = send(&app(ShotplanConfig::default()), get("/api/catalog")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["clubs"][0]["id"], "DR");
    }
}
