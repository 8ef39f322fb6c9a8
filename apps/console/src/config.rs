use std::{fs, path::Path, time::Duration};

use tracing::{debug, warn};

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000/api";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub request_timeout_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Values given on the command line; they win over every other layer.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub api_base_url: Option<String>,
    pub request_timeout_ms: Option<u64>,
}

/// Defaults, then the TOML file at `path` if present, then the process
/// environment, then `overrides`.
pub fn load_settings(path: &Path, overrides: &Overrides) -> Settings {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => apply_file(&mut settings, &raw, path),
        Err(err) => debug!(path = %path.display(), error = %err, "config: no settings file"),
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());

    if let Some(v) = &overrides.api_base_url {
        settings.api_base_url = v.clone();
    }
    if let Some(v) = overrides.request_timeout_ms {
        settings.request_timeout_ms = v;
    }

    settings
}

fn apply_file(settings: &mut Settings, raw: &str, path: &Path) {
    let table = match toml::from_str::<toml::Table>(raw) {
        Ok(table) => table,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "config: unreadable settings file ignored");
            return;
        }
    };

    match table.get("api_base_url") {
        Some(toml::Value::String(v)) => settings.api_base_url = v.clone(),
        Some(other) => warn!(value = %other, "config: api_base_url must be a string, ignored"),
        None => {}
    }

    match table.get("request_timeout_ms") {
        Some(toml::Value::Integer(v)) => match u64::try_from(*v) {
            Ok(ms) if ms > 0 => settings.request_timeout_ms = ms,
            _ => warn!(value = v, "config: request_timeout_ms must be positive, ignored"),
        },
        Some(other) => warn!(value = %other, "config: request_timeout_ms must be an integer, ignored"),
        None => {}
    }
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("GRADEBOOK_API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = var("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }

    if let Some(v) = var("APP__REQUEST_TIMEOUT_MS") {
        match v.trim().parse::<u64>() {
            Ok(ms) if ms > 0 => settings.request_timeout_ms = ms,
            _ => warn!(value = %v, "config: APP__REQUEST_TIMEOUT_MS ignored"),
        }
    }
}

/// CLI value parser for `--timeout-ms`.
pub fn parse_timeout_ms(raw: &str) -> Result<u64, String> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err("timeout must be greater than zero".into()),
        Ok(ms) => Ok(ms),
        Err(err) => Err(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        env,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    fn env_of<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        move |key| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn defaults_point_at_local_service() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url, "http://127.0.0.1:5000/api");
        assert_eq!(settings.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn file_values_replace_defaults() {
        let mut settings = Settings::default();
        apply_file(
            &mut settings,
            "api_base_url = \"http://grades.test/api\"\nrequest_timeout_ms = 2500\n",
            Path::new("gradebook.toml"),
        );
        assert_eq!(settings.api_base_url, "http://grades.test/api");
        assert_eq!(settings.request_timeout_ms, 2500);
    }

    #[test]
    fn invalid_file_values_are_ignored() {
        let mut settings = Settings::default();
        apply_file(
            &mut settings,
            "api_base_url = 5\nrequest_timeout_ms = -1\n",
            Path::new("gradebook.toml"),
        );
        assert_eq!(settings, Settings::default());

        apply_file(&mut settings, "not toml at all [", Path::new("gradebook.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn prefixed_env_wins_over_plain_env() {
        let mut settings = Settings::default();
        apply_env(
            &mut settings,
            env_of(&[
                ("GRADEBOOK_API_BASE_URL", "http://plain.test/api"),
                ("APP__API_BASE_URL", "http://prefixed.test/api"),
                ("APP__REQUEST_TIMEOUT_MS", "750"),
            ]),
        );
        assert_eq!(settings.api_base_url, "http://prefixed.test/api");
        assert_eq!(settings.request_timeout_ms, 750);
    }

    #[test]
    fn unparsable_env_timeout_is_ignored() {
        let mut settings = Settings::default();
        apply_env(&mut settings, env_of(&[("APP__REQUEST_TIMEOUT_MS", "soon")]));
        assert_eq!(settings.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);

        apply_env(&mut settings, env_of(&[("APP__REQUEST_TIMEOUT_MS", "0")]));
        assert_eq!(settings.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
    }

    #[test]
    fn overrides_win_over_file() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = env::temp_dir().join(format!("gradebook_config_test_{suffix}.toml"));
        fs::write(&path, "api_base_url = \"http://file.test/api\"\nrequest_timeout_ms = 3000\n")
            .expect("write settings");

        let settings = load_settings(
            &path,
            &Overrides {
                api_base_url: Some("http://cli.test/api".into()),
                request_timeout_ms: None,
            },
        );

        assert_eq!(settings.api_base_url, "http://cli.test/api");
        if env::var("APP__REQUEST_TIMEOUT_MS").is_err() {
            assert_eq!(settings.request_timeout_ms, 3000);
        }
        fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn missing_file_leaves_defaults() {
        let path = env::temp_dir().join("gradebook_config_test_missing.toml");
        let settings = load_settings(
            &path,
            &Overrides {
                api_base_url: Some(DEFAULT_API_BASE_URL.into()),
                request_timeout_ms: Some(DEFAULT_REQUEST_TIMEOUT_MS),
            },
        );
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn cli_timeout_must_be_positive() {
        assert_eq!(parse_timeout_ms("250"), Ok(250));
        assert!(parse_timeout_ms("0").is_err());
        assert!(parse_timeout_ms("ten").is_err());
    }
}
