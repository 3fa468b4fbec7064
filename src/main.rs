use rostat::{
    args, config,
    http::{self, state},
    logging, roblox,
};
use snafu::{Report, ResultExt, Snafu};
use std::{env, io, sync::Arc, time::Duration};
use tokio::net;
use tracing::info;

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Snafu)]
enum ApplicationError {
    #[snafu(display("initializing app logging"))]
    InitLogging {
        #[snafu(source)]
        source: logging::InitLoggingError,
    },

    #[snafu(display("loading config"))]
    LoadConfig {
        #[snafu(source)]
        source: config::LoadConfigError,
    },

    #[snafu(display("invalid credential header name in config"))]
    InvalidCredentialHeader {
        #[snafu(source)]
        source: axum::http::header::InvalidHeaderName,
    },

    #[snafu(display("building upstream HTTP client"))]
    BuildClient {
        #[snafu(source)]
        source: reqwest::Error,
    },

    #[snafu(display("binding TCP listener"))]
    BindListener {
        #[snafu(source)]
        source: io::Error,
    },

    #[snafu(display("serving HTTP API"))]
    ServeHttp {
        #[snafu(source)]
        source: io::Error,
    },
}

fn main() -> Report<ApplicationError> {
    Report::capture(common_main)
}

fn common_main() -> Result<(), ApplicationError> {
    let args = args::load();

    logging::load(&args.logs_dir).context(InitLoggingSnafu)?;

    let config = match config::load_or_create_config(&args.config_path).context(LoadConfigSnafu)? {
        config::ConfigSource::Created(config) => {
            info!(
                "application config not found. created new ({:?}): {:?}",
                args.config_path.canonicalize().unwrap(),
                config
            );
            return Ok(());
        }
        config::ConfigSource::Loaded(config) => config,
    };

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap();
    rt.block_on(async_main(config))
}

async fn async_main(config: config::Config) -> Result<(), ApplicationError> {
    // Deployment platforms hand out the port through the environment; the
    // config file value is the fallback.
    let port = env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(config.api.port);

    let credential_header = config
        .credential_header
        .parse::<axum::http::HeaderName>()
        .context(InvalidCredentialHeaderSnafu)?;

    let client = roblox::Client::new(roblox::Endpoints::default(), UPSTREAM_TIMEOUT)
        .context(BuildClientSnafu)?;

    let addr = std::net::SocketAddr::from((config.api.host, port));
    let listener = net::TcpListener::bind(addr)
        .await
        .context(BindListenerSnafu)?;
    info!("relay listening on address {}", addr);

    let state = Arc::new(state::State {
        client,
        credential_header,
    });
    http::init(listener, state).await.context(ServeHttpSnafu)?;

    Ok(())
}
