mod get_statuses_by_usernames;
mod mapper;
mod query;

use crate::http::state::ClonableState;
use axum::{
    Router,
    routing::{MethodFilter, on},
};

pub fn router() -> Router<ClonableState> {
    Router::new().route(
        "/status",
        on(
            MethodFilter::POST,
            get_statuses_by_usernames::get_statuses_by_usernames,
        ),
    )
}
