use axum::Router;
use routes::{api, root};
use tokio::{io, net};

pub mod dto;
pub mod extractors;
mod routes;
pub mod state;

pub async fn init(
    listener: net::TcpListener,
    state: state::ClonableState,
) -> Result<(), io::Error> {
    axum::serve(listener, router(state)).await
}

pub fn router(state: state::ClonableState) -> Router {
    Router::new()
        .merge(root::router())
        .nest("/api", api::router())
        .with_state(state)
}
