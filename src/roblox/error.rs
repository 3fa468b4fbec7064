use snafu::Snafu;

/// Failure modes of the bulk presence lookup. `Unauthorized` is the one the
/// caller must be able to tell apart: it maps to a 403 instead of a 500.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum PresenceError {
    #[snafu(display("presence endpoint rejected the caller credential"))]
    Unauthorized,

    #[snafu(display("requesting bulk presence"))]
    Request {
        #[snafu(source)]
        source: reqwest::Error,
    },

    #[snafu(display("decoding bulk presence response"))]
    Decode {
        #[snafu(source)]
        source: reqwest::Error,
    },
}
