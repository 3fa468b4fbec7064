use crate::{http::state::ClonableState, roblox::Credential};
use axum::{extract::FromRequestParts, http::request::Parts, response::Response};

/// Caller credential pulled from the configured header. Absence is not a
/// rejection: unauthenticated requests simply fail the upstream presence
/// lookup later on.
pub struct CallerCredential(pub Option<Credential>);

impl FromRequestParts<ClonableState> for CallerCredential {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ClonableState,
    ) -> Result<Self, Self::Rejection> {
        let credential = parts
            .headers
            .get(&state.credential_header)
            .and_then(|value| value.to_str().ok())
            .map(Credential::new);

        Ok(CallerCredential(credential))
    }
}
