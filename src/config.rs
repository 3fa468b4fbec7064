use serde::{Deserialize, Serialize};
use snafu::{ResultExt, Snafu};
use std::{fs, io, net::IpAddr, path::Path};

#[derive(Serialize, Deserialize, Debug)]
pub struct Config {
    pub api: Api,

    #[serde(default = "default_credential_header")]
    pub credential_header: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Api {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Snafu)]
pub enum LoadConfigError {
    #[snafu(display("reading config file"))]
    Read {
        #[snafu(source)]
        source: io::Error,
    },

    #[snafu(display("parsing config file"))]
    Parse {
        #[snafu(source)]
        source: serde_json::Error,
    },

    #[snafu(display("serializing default config"))]
    Serialize {
        #[snafu(source)]
        source: serde_json::Error,
    },

    #[snafu(display("writing default config file"))]
    Write {
        #[snafu(source)]
        source: io::Error,
    },
}

pub enum ConfigSource {
    Created(Config),
    Loaded(Config),
}

pub fn load_or_create_config(path: &Path) -> Result<ConfigSource, LoadConfigError> {
    if !path.exists() {
        let config = default();
        let serialized = serde_json::to_string_pretty(&config).context(SerializeSnafu)?;
        fs::write(path, serialized).context(WriteSnafu)?;

        return Ok(ConfigSource::Created(config));
    }

    let raw = fs::read_to_string(path).context(ReadSnafu)?;
    let config = serde_json::from_str(&raw).context(ParseSnafu)?;

    Ok(ConfigSource::Loaded(config))
}

pub fn default() -> Config {
    Config {
        api: Api {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8080,
        },
        credential_header: default_credential_header(),
    }
}

fn default_credential_header() -> String {
    "x-roblox-cookie".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_json() {
        let serialized = serde_json::to_string(&default()).unwrap();
        let parsed = serde_json::from_str::<Config>(&serialized).unwrap();

        assert_eq!(parsed.api.port, 8080);
        assert_eq!(parsed.api.host, IpAddr::from([0, 0, 0, 0]));
        assert_eq!(parsed.credential_header, "x-roblox-cookie");
    }

    #[test]
    fn creates_default_config_when_file_is_missing() {
        let path = std::env::temp_dir().join(format!("rostat-config-{}.json", std::process::id()));
        let _ = fs::remove_file(&path);

        let ConfigSource::Created(created) = load_or_create_config(&path).unwrap() else {
            panic!("expected the default config to be created");
        };
        assert_eq!(created.api.port, 8080);
        assert!(path.exists());

        let ConfigSource::Loaded(loaded) = load_or_create_config(&path).unwrap() else {
            panic!("expected the existing config to be loaded");
        };
        assert_eq!(loaded.api.port, created.api.port);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn credential_header_falls_back_when_absent() {
        let parsed =
            serde_json::from_str::<Config>(r#"{ "api": { "host": "0.0.0.0", "port": 9000 } }"#)
                .unwrap();

        assert_eq!(parsed.api.port, 9000);
        assert_eq!(parsed.credential_header, "x-roblox-cookie");
    }
}
