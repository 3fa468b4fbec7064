use crate::http::state::ClonableState;
use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{MethodFilter, on},
};

// Deployment platforms probe this route; it must answer fast and without
// touching any upstream service.
const LIVENESS_MESSAGE: &str = "Roblox Status API is LIVE and Healthy.";

pub fn router() -> Router<ClonableState> {
    Router::new().route("/", on(MethodFilter::GET, root))
}

async fn root() -> impl IntoResponse {
    (StatusCode::OK, LIVENESS_MESSAGE)
}
