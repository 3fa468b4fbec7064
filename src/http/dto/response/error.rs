use serde::Serialize;

#[derive(Serialize)]
pub struct Error {
    pub error: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Error {
        Error {
            error: message.into(),
        }
    }
}
