use crate::roblox;
use axum::http::HeaderName;
use std::sync::Arc;

pub type ClonableState = Arc<State>;

pub struct State {
    pub client: roblox::Client,
    pub credential_header: HeaderName,
}
