use serde::{Deserialize, Serialize};
use std::{collections::HashMap, net::IpAddr, path::Path};

/// Environment prefix, e.g. `EV_CHARGE__SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "EV_CHARGE";

/// Plain listening-port override, takes precedence over everything else
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub endpoint: String,
}

/// Load configuration from defaults, an optional TOML file and the process environment
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    load_config_with_env(path, std::env::vars().collect())
}

/// Same as [`load_config`], reading environment variables from `env`
pub fn load_config_with_env(path: &Path, env: HashMap<String, String>) -> anyhow::Result<Config> {
    let port_override = match env.get(PORT_ENV) {
        Some(value) => Some(
            value
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("Invalid {} value '{}': {}", PORT_ENV, value, e))?,
        ),
        None => None,
    };

    let config = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("server.log_level", "info")?
        .set_default("server.log_format", "text")?
        .set_default("metrics.enabled", true)?
        .set_default("metrics.endpoint", "/metrics")?
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .source(Some(env)),
        )
        .set_override_option("server.port", port_override)?
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.server.port == 0 {
        anyhow::bail!("Server port must not be 0");
    }

    if cfg.server.host.parse::<IpAddr>().is_err() {
        anyhow::bail!("Server host '{}' is not a valid IP address", cfg.server.host);
    }

    match cfg.server.log_format.as_str() {
        "text" | "json" => {}
        other => anyhow::bail!("Invalid log format '{}': expected 'text' or 'json'", other),
    }

    if cfg.metrics.enabled {
        let endpoint = cfg.metrics.endpoint.as_str();
        if !endpoint.starts_with('/') {
            anyhow::bail!("Metrics endpoint '{}' must start with '/'", endpoint);
        }
        if matches!(endpoint, "/" | "/calculate" | "/health" | "/ready") {
            anyhow::bail!("Metrics endpoint '{}' collides with an application route", endpoint);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> Config {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                log_level: "info".to_string(),
                log_format: "text".to_string(),
            },
            metrics: MetricsConfig {
                enabled: true,
                endpoint: "/metrics".to_string(),
            },
        }
    }

    fn write_config_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir()
            .join(format!("ev-charge-cost-{}-{}.toml", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn env(vars: &[(&str, &str)]) -> HashMap<String, String> {
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_load_config_from_file() {
        let path = write_config_file(
            "file",
            "[server]\nport = 9100\nlog_format = \"json\"\n\n[metrics]\nenabled = false\n",
        );

        let cfg = load_config_with_env(&path, HashMap::new()).unwrap();
        std::fs::remove_file(&path).unwrap();

        // Unset keys fall back to defaults
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 9100);
        assert_eq!(cfg.server.log_level, "info");
        assert_eq!(cfg.server.log_format, "json");
        assert!(!cfg.metrics.enabled);
        assert_eq!(cfg.metrics.endpoint, "/metrics");
    }

    #[test]
    fn test_load_config_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("ev-charge-cost-does-not-exist.toml");

        let cfg = load_config_with_env(&path, HashMap::new()).unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.server.log_format, "text");
        assert!(cfg.metrics.enabled);
    }

    #[test]
    fn test_prefixed_env_overrides_file() {
        let path = write_config_file("prefixed", "[server]\nport = 9100\n");

        let cfg = load_config_with_env(
            &path,
            env(&[
                ("EV_CHARGE__SERVER__PORT", "9200"),
                ("EV_CHARGE__SERVER__LOG_LEVEL", "debug"),
            ]),
        )
        .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(cfg.server.port, 9200);
        assert_eq!(cfg.server.log_level, "debug");
    }

    #[test]
    fn test_port_env_overrides_everything() {
        let path = write_config_file("port", "[server]\nport = 9100\n");

        let cfg = load_config_with_env(
            &path,
            env(&[("EV_CHARGE__SERVER__PORT", "9200"), ("PORT", "9300")]),
        )
        .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(cfg.server.port, 9300);
    }

    #[test]
    fn test_port_env_without_file() {
        let path = std::env::temp_dir().join("ev-charge-cost-does-not-exist.toml");

        let cfg = load_config_with_env(&path, env(&[("PORT", "8123")])).unwrap();
        assert_eq!(cfg.server.port, 8123);
    }

    #[test]
    fn test_invalid_port_env_is_an_error() {
        let path = std::env::temp_dir().join("ev-charge-cost-does-not-exist.toml");

        let err = load_config_with_env(&path, env(&[("PORT", "abc")])).unwrap_err();
        assert!(err.to_string().contains("Invalid PORT value 'abc'"));

        // Zero parses but fails validation
        let err = load_config_with_env(&path, env(&[("PORT", "0")])).unwrap_err();
        assert!(err.to_string().contains("port must not be 0"));
    }

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&create_test_config()).is_ok());
    }

    #[test]
    fn test_validate_config_rejects_zero_port() {
        let mut cfg = create_test_config();
        cfg.server.port = 0;

        let result = validate_config(&cfg);
        assert!(result.unwrap_err().to_string().contains("port must not be 0"));
    }

    #[test]
    fn test_validate_config_rejects_bad_host() {
        let mut cfg = create_test_config();
        cfg.server.host = "not-an-ip".to_string();
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_validate_config_rejects_log_format() {
        let mut cfg = create_test_config();
        cfg.server.log_format = "xml".to_string();
        assert!(validate_config(&cfg).unwrap_err().to_string().contains("xml"));
    }

    #[test]
    fn test_validate_config_metrics_endpoint() {
        let mut cfg = create_test_config();
        cfg.metrics.endpoint = "/calculate".to_string();
        assert!(validate_config(&cfg).is_err());

        cfg.metrics.endpoint = "metrics".to_string();
        assert!(validate_config(&cfg).is_err());

        // Disabled metrics are not checked
        cfg.metrics.enabled = false;
        assert!(validate_config(&cfg).is_ok());
    }
}
