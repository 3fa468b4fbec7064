pub mod error;
pub mod types;

use crate::roblox::types::{request, response};
use reqwest::{StatusCode, header};
use snafu::ResultExt;
use std::{collections::HashMap, fmt, time::Duration};
use tracing::{error, warn};

/// The bulk username lookup accepts at most this many names per call.
const USERNAMES_PER_CHUNK: usize = 100;

pub const UNKNOWN_PLACE: &str = "Unknown Place";
pub const PLACE_LOOKUP_FAILED: &str = "Unknown Place (Access Denied or Game Info Failed)";

/// Caller-supplied session token, forwarded verbatim to the upstream
/// presence and place endpoints. Never logged: `Debug` output is redacted.
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Credential {
        Credential(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str("Credential(..)")
    }
}

pub struct Endpoints {
    pub usernames: url::Url,
    pub presence: url::Url,
    pub place_details: url::Url,
}

impl Default for Endpoints {
    fn default() -> Endpoints {
        Endpoints {
            usernames: url::Url::parse("https://users.roblox.com/v1/usernames/users")
                .expect("static endpoint URL"),
            presence: url::Url::parse("https://presence.roblox.com/v1/presence/users")
                .expect("static endpoint URL"),
            place_details: url::Url::parse(
                "https://games.roblox.com/v1/games/multiget-place-details",
            )
            .expect("static endpoint URL"),
        }
    }
}

pub struct Client {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl Client {
    pub fn new(
        endpoints: Endpoints,
        timeout: impl Into<Option<Duration>>,
    ) -> Result<Client, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout.into() {
            builder = builder.timeout(timeout);
        }

        Ok(Client {
            http: builder.build()?,
            endpoints,
        })
    }

    /// Resolves usernames to numeric user ids, keyed by lowercase username.
    ///
    /// The input is dispatched in contiguous chunks of at most
    /// [`USERNAMES_PER_CHUNK`] names. A failed chunk is logged and skipped;
    /// its names simply stay absent from the result.
    pub async fn resolve_user_ids(&self, usernames: &[String]) -> HashMap<String, u64> {
        let mut resolved = HashMap::new();
        if usernames.is_empty() {
            return resolved;
        }

        for chunk in usernames.chunks(USERNAMES_PER_CHUNK) {
            match self.lookup_chunk(chunk).await {
                Ok(lookup) => {
                    for user in lookup.data {
                        resolved.entry(user.name.to_lowercase()).or_insert(user.id);
                    }
                }
                Err(err) => {
                    error!("resolving a chunk of {} usernames: {err}", chunk.len());
                }
            }
        }

        resolved
    }

    async fn lookup_chunk(
        &self,
        chunk: &[String],
    ) -> Result<response::UsernamesLookup, reqwest::Error> {
        self.http
            .post(self.endpoints.usernames.clone())
            .json(&request::UsernamesLookup {
                usernames: chunk.to_vec(),
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Fetches presence records for the given ids in a single call, keyed by
    /// user id. An empty id set skips the network call entirely.
    ///
    /// The credential travels verbatim in the `Authorization` header. A 403
    /// from upstream surfaces as [`error::PresenceError::Unauthorized`];
    /// every other failure is fatal to the whole lookup as well, there are
    /// no partial results.
    pub async fn fetch_presences(
        &self,
        user_ids: &[u64],
        credential: Option<&Credential>,
    ) -> Result<HashMap<u64, response::UserPresence>, error::PresenceError> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut builder = self
            .http
            .post(self.endpoints.presence.clone())
            .json(&request::PresenceLookup {
                user_ids: user_ids.to_vec(),
            });
        if let Some(credential) = credential {
            builder = builder.header(header::AUTHORIZATION, credential.as_str());
        }

        let response = builder.send().await.context(error::RequestSnafu)?;
        if response.status() == StatusCode::FORBIDDEN {
            return error::UnauthorizedSnafu.fail();
        }

        let lookup = response
            .error_for_status()
            .context(error::RequestSnafu)?
            .json::<response::PresenceLookup>()
            .await
            .context(error::DecodeSnafu)?;

        Ok(lookup
            .user_presences
            .into_iter()
            .map(|presence| (presence.user_id, presence))
            .collect())
    }

    /// Resolves a place or universe id to a human-readable name.
    ///
    /// This is the only outbound call that carries the credential as a
    /// cookie. Failures never propagate: a missing id yields
    /// [`UNKNOWN_PLACE`] and a failed lookup yields [`PLACE_LOOKUP_FAILED`].
    pub async fn place_name(&self, id: Option<u64>, credential: Option<&Credential>) -> String {
        let Some(id) = id else {
            return UNKNOWN_PLACE.to_string();
        };

        match self.place_details(id, credential).await {
            Ok(details) => details
                .into_iter()
                .next()
                .map(|place| place.name)
                .unwrap_or_else(|| UNKNOWN_PLACE.to_string()),
            Err(err) => {
                warn!("looking up place {id}: {err}");
                PLACE_LOOKUP_FAILED.to_string()
            }
        }
    }

    async fn place_details(
        &self,
        id: u64,
        credential: Option<&Credential>,
    ) -> Result<Vec<response::PlaceDetails>, reqwest::Error> {
        let mut url = self.endpoints.place_details.clone();
        url.query_pairs_mut()
            .append_pair("placeIds", &id.to_string());

        let mut builder = self.http.get(url);
        if let Some(credential) = credential {
            builder = builder.header(
                header::COOKIE,
                format!(".ROBLOSECURITY={}", credential.as_str()),
            );
        }

        builder.send().await?.error_for_status()?.json().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_debug_is_redacted() {
        let credential = Credential::new("_|WARNING:-top-secret-token");
        assert_eq!(format!("{:?}", credential), "Credential(..)");
    }
}
