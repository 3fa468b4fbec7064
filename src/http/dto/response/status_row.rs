use serde::Serialize;

/// One response row per requested username: either a not-found marker or the
/// full presence snapshot. Location fields serialize as explicit nulls.
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum StatusRow {
    NotFound(NotFoundRow),
    Resolved(ResolvedRow),
}

#[derive(Serialize, Debug)]
pub struct NotFoundRow {
    pub username: String,
    pub error: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedRow {
    pub username: String,
    pub user_id: u64,
    pub status: String,
    pub place_id: Option<u64>,
    pub universe_id: Option<u64>,
    pub map_name: String,
    pub last_location: Option<String>,
}
