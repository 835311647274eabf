//! Configuration file location and loading

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use statusknob_core::config::AppConfig;

use super::{parse, LoadError};

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "STATUSKNOB_CONFIG";

/// File used when neither an argument nor the environment names one
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Pick the configuration path: argument, then environment, then default
pub fn config_path(arg: Option<OsString>, env: Option<OsString>) -> PathBuf {
    arg.or(env)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Read, parse and validate a configuration file
pub fn load(path: &Path) -> Result<AppConfig, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse(&text)?;
    info!(
        "Loaded {} status presets from {}",
        config.statuses.len(),
        path.display()
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_precedence() {
        assert_eq!(
            config_path(Some("a.toml".into()), Some("b.toml".into())),
            PathBuf::from("a.toml")
        );
        assert_eq!(config_path(None, Some("b.toml".into())), PathBuf::from("b.toml"));
        assert_eq!(config_path(None, None), PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = load(Path::new("/nonexistent/statusknob.toml")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/statusknob.toml"));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("statusknob-{}.toml", std::process::id()));
        fs::write(
            &path,
            r#"
timezone = "UTC"
[wifi]
ssid = "lab"
password = ""
[remote]
token = "t"
[[status]]
status = "Away"
emoji = ":x:"
expiry = 15
"#,
        )
        .unwrap();

        let config = load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.wifi.ssid.as_str(), "lab");
        assert_eq!(config.statuses.get(0).unwrap().expiry_minutes(), 15);
    }
}
