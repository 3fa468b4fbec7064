use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct UsernamesLookup {
    pub data: Vec<ResolvedUser>,
}

#[derive(Deserialize, Debug)]
pub struct ResolvedUser {
    pub name: String,
    pub id: u64,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PresenceLookup {
    pub user_presences: Vec<UserPresence>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserPresence {
    pub user_id: u64,
    pub user_presence_type: PresenceKind,

    #[serde(default)]
    pub place_id: Option<u64>,

    #[serde(default)]
    pub universe_id: Option<u64>,

    #[serde(default)]
    pub last_location: Option<String>,
}

/// Wire codes of the bulk presence endpoint. Codes this relay does not act
/// on degrade to `Offline`.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(from = "u8")]
pub enum PresenceKind {
    Offline,
    Online,
    InStudio,
    InGame,
}

impl From<u8> for PresenceKind {
    fn from(code: u8) -> PresenceKind {
        match code {
            1 => PresenceKind::Online,
            2 => PresenceKind::InStudio,
            3 => PresenceKind::InGame,
            _ => PresenceKind::Offline,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct PlaceDetails {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_presence_with_optional_fields_absent() {
        let raw = r#"{
            "userPresences": [
                { "userId": 11, "userPresenceType": 3, "placeId": 123, "universeId": 456, "lastLocation": "Crossroads" },
                { "userId": 12, "userPresenceType": 0 }
            ]
        }"#;

        let lookup = serde_json::from_str::<PresenceLookup>(raw).unwrap();
        assert_eq!(lookup.user_presences.len(), 2);

        let in_game = &lookup.user_presences[0];
        assert_eq!(in_game.user_presence_type, PresenceKind::InGame);
        assert_eq!(in_game.place_id, Some(123));
        assert_eq!(in_game.universe_id, Some(456));
        assert_eq!(in_game.last_location.as_deref(), Some("Crossroads"));

        let offline = &lookup.user_presences[1];
        assert_eq!(offline.user_presence_type, PresenceKind::Offline);
        assert_eq!(offline.place_id, None);
        assert_eq!(offline.last_location, None);
    }

    #[test]
    fn unknown_presence_codes_degrade_to_offline() {
        assert_eq!(PresenceKind::from(4), PresenceKind::Offline);
        assert_eq!(PresenceKind::from(250), PresenceKind::Offline);
    }
}
