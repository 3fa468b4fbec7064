use serde::Deserialize;

#[derive(Deserialize)]
pub struct StatusRequest {
    #[serde(default)]
    pub users: Vec<String>,
}
