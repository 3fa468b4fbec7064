use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct UsernamesLookup {
    pub usernames: Vec<String>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PresenceLookup {
    pub user_ids: Vec<u64>,
}
