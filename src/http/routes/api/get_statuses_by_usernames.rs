use crate::{
    http::{
        dto::{request::status::StatusRequest, response::error},
        extractors::credential::CallerCredential,
        routes::api::{mapper, query::UsernameQuery},
        state::ClonableState,
    },
    roblox::{error::PresenceError, types::response::PresenceKind},
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::error;

const EMPTY_USER_LIST: &str = "Daftar pengguna kosong.";
const INVALID_CREDENTIAL: &str = "Cookie Roblox tidak valid atau tidak memiliki izin akses.";
const PRESENCE_UNAVAILABLE: &str = "Gagal memuat status dari Roblox.";

pub async fn get_statuses_by_usernames(
    State(state): State<ClonableState>,
    CallerCredential(credential): CallerCredential,
    Json(StatusRequest { users }): Json<StatusRequest>,
) -> impl IntoResponse {
    let query = UsernameQuery::parse(&users);
    if query.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(error::Error::new(EMPTY_USER_LIST)),
        )
            .into_response();
    }

    let resolved = state.client.resolve_user_ids(query.usernames()).await;
    let user_ids = resolved.values().copied().collect::<Vec<_>>();

    let presences = match state
        .client
        .fetch_presences(&user_ids, credential.as_ref())
        .await
    {
        Ok(presences) => presences,
        Err(PresenceError::Unauthorized) => {
            return (
                StatusCode::FORBIDDEN,
                Json(error::Error::new(INVALID_CREDENTIAL)),
            )
                .into_response();
        }
        Err(err) => {
            error!("loading bulk presence: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(error::Error::new(PRESENCE_UNAVAILABLE)),
            )
                .into_response();
        }
    };

    let mut rows = Vec::with_capacity(query.len());
    for username in query.iter() {
        let Some(&user_id) = resolved.get(&username.to_lowercase()) else {
            rows.push(mapper::not_found_row(username));
            continue;
        };

        let presence = presences.get(&user_id);

        // Enrichment runs only for in-game users with a visible place id;
        // the universe id is preferred for the lookup when present.
        let place_name = match presence {
            Some(presence)
                if presence.user_presence_type == PresenceKind::InGame
                    && presence.place_id.is_some() =>
            {
                Some(
                    state
                        .client
                        .place_name(
                            presence.universe_id.or(presence.place_id),
                            credential.as_ref(),
                        )
                        .await,
                )
            }
            _ => None,
        };

        rows.push(mapper::map_row(username, user_id, presence, place_name));
    }

    (StatusCode::OK, Json(rows)).into_response()
}
