//! Configuration constants and profile loading for seedline
//!
//! Profiles live in an INI file, one section per profile name:
//!
//! ```ini
//! [default]
//! base_url = https://keywords.example.com
//! timeout_secs = 30
//! language = English
//! max_keywords = 25
//! difficulty_level = medium
//! report_length = 300
//! ```

use crate::repl::models::RequestOptions;
use anyhow::{Context, Result};
use ini::Ini;
use std::path::Path;
use std::time::Duration;

/// Default profile file path for seedline
pub const DEFAULT_PROFILE_PATH: &str = "~/.seedline/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "SEEDLINE_PROFILE_PATH";

/// Environment variable holding the log filter (e.g. `debug`, `seedline=trace`)
pub const LOG_LEVEL_ENV_VAR: &str = "SEEDLINE_LOG_LEVEL";

/// Backend used when no profile names one
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Name of the profile used when none is given
pub const DEFAULT_PROFILE_NAME: &str = "default";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Connection and request settings for one backend
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub options: RequestOptions,
}

impl Profile {
    /// Profile pointing at [`DEFAULT_BASE_URL`] with no options
    pub fn blank(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            options: RequestOptions::default(),
        }
    }
}

/// Load a profile from an INI file
///
/// A missing file or section yields a blank profile; malformed values are errors.
pub fn load_profile(profile_name: &str, profile_path: &str) -> Result<Profile> {
    let expanded = shellexpand::tilde(profile_path).to_string();
    tracing::debug!("Loading profile '{}' from '{}'", profile_name, expanded);

    if !Path::new(&expanded).exists() {
        tracing::debug!("Profile file '{}' not found, using blank profile", expanded);
        return Ok(Profile::blank(profile_name));
    }

    let ini = Ini::load_from_file(&expanded)
        .with_context(|| format!("Failed to read profile file '{expanded}'"))?;

    let Some(section) = ini.section(Some(profile_name)) else {
        tracing::debug!("Profile '{}' not found, using blank profile", profile_name);
        return Ok(Profile::blank(profile_name));
    };

    let non_empty = |key: &str| {
        section
            .get(key)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    };

    let parse_number = |key: &str| -> Result<Option<u32>> {
        non_empty(key)
            .map(|value| {
                value.parse::<u32>().with_context(|| {
                    format!("Invalid {key} '{value}' in profile '{profile_name}'")
                })
            })
            .transpose()
    };

    let profile = Profile {
        name: profile_name.to_string(),
        base_url: non_empty("base_url").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        timeout: parse_number("timeout_secs")?.map(|secs| Duration::from_secs(secs.into())),
        options: RequestOptions {
            language: non_empty("language"),
            max_keywords: parse_number("max_keywords")?,
            difficulty_level: non_empty("difficulty_level"),
            report_length: parse_number("report_length")?,
        },
    };

    tracing::debug!("Profile loaded successfully, server: {}", profile.base_url);
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn profile_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_profile_path() {
        assert_eq!(DEFAULT_PROFILE_PATH, "~/.seedline/profile");
    }

    #[test]
    fn test_env_var_name() {
        assert_eq!(PROFILE_PATH_ENV_VAR, "SEEDLINE_PROFILE_PATH");
    }

    #[test]
    fn test_get_profile_path_default() {
        // Save current env var state
        let original = std::env::var_os(PROFILE_PATH_ENV_VAR);

        std::env::remove_var(PROFILE_PATH_ENV_VAR);
        assert_eq!(get_profile_path(), DEFAULT_PROFILE_PATH);

        // Restore original state
        if let Some(val) = original {
            std::env::set_var(PROFILE_PATH_ENV_VAR, val);
        }
    }

    #[test]
    fn missing_file_should_yield_blank_profile() {
        let profile = load_profile("default", "/nonexistent/seedline/profile").unwrap();
        assert_eq!(profile, Profile::blank("default"));
    }

    #[test]
    fn should_load_named_section() {
        let file = profile_file(
            "[default]\nbase_url = http://a\n\n[staging]\nbase_url = https://staging.example.com\ntimeout_secs = 15\nlanguage = Spanish\nmax_keywords = 10\nreport_length = 800\n",
        );

        let profile = load_profile("staging", file.path().to_str().unwrap()).unwrap();
        assert_eq!(profile.base_url, "https://staging.example.com");
        assert_eq!(profile.timeout, Some(Duration::from_secs(15)));
        assert_eq!(profile.options.language.as_deref(), Some("Spanish"));
        assert_eq!(profile.options.max_keywords, Some(10));
        assert_eq!(profile.options.report_length, Some(800));
        assert_eq!(profile.options.difficulty_level, None);
    }

    #[test]
    fn missing_section_should_yield_blank_profile() {
        let file = profile_file("[default]\nbase_url = http://a\n");
        let profile = load_profile("prod", file.path().to_str().unwrap()).unwrap();
        assert_eq!(profile.base_url, DEFAULT_BASE_URL);
        assert_eq!(profile.name, "prod");
    }

    #[test]
    fn invalid_number_should_be_an_error() {
        let file = profile_file("[default]\nmax_keywords = many\n");
        let error = load_profile("default", file.path().to_str().unwrap()).unwrap_err();
        assert!(error.to_string().contains("max_keywords"));
    }
}
