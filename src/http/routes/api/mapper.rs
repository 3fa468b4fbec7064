use crate::{
    http::dto::response::status_row::{NotFoundRow, ResolvedRow, StatusRow},
    roblox,
    roblox::types::response::{PresenceKind, UserPresence},
};

const USER_NOT_FOUND: &str = "Pengguna tidak ditemukan di Roblox.";

const STATUS_IN_GAME: &str = "In Game";
const STATUS_IN_STUDIO: &str = "In Studio";
const STATUS_ONLINE: &str = "Online";
const STATUS_OFFLINE: &str = "Offline";

const MAP_HIDDEN_PLACE: &str = "In Game (placeId hidden)";
const MAP_ONLINE: &str = "Online on website";

pub fn not_found_row(username: impl Into<String>) -> StatusRow {
    StatusRow::NotFound(NotFoundRow {
        username: username.into(),
        error: USER_NOT_FOUND.to_string(),
    })
}

/// Joins a resolved user with its presence record into a response row.
///
/// `place_name` is the enrichment result for in-game users; it is ignored
/// for every other presence kind. A user the presence endpoint said nothing
/// about counts as offline with no location.
pub fn map_row(
    username: impl Into<String>,
    user_id: u64,
    presence: Option<&UserPresence>,
    place_name: Option<String>,
) -> StatusRow {
    let Some(presence) = presence else {
        return StatusRow::Resolved(ResolvedRow {
            username: username.into(),
            user_id,
            status: STATUS_OFFLINE.to_string(),
            place_id: None,
            universe_id: None,
            map_name: STATUS_OFFLINE.to_string(),
            last_location: None,
        });
    };

    let (status, map_name) = match presence.user_presence_type {
        PresenceKind::InGame => (
            STATUS_IN_GAME,
            if presence.place_id.is_none() {
                MAP_HIDDEN_PLACE.to_string()
            } else {
                place_name.unwrap_or_else(|| roblox::UNKNOWN_PLACE.to_string())
            },
        ),
        PresenceKind::InStudio => (STATUS_IN_STUDIO, STATUS_IN_STUDIO.to_string()),
        PresenceKind::Online => (STATUS_ONLINE, MAP_ONLINE.to_string()),
        PresenceKind::Offline => (STATUS_OFFLINE, STATUS_OFFLINE.to_string()),
    };

    StatusRow::Resolved(ResolvedRow {
        username: username.into(),
        user_id,
        status: status.to_string(),
        place_id: presence.place_id,
        universe_id: presence.universe_id,
        map_name,
        last_location: presence.last_location.clone(),
    })
}
