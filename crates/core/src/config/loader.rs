//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result};
use std::path::Path;

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed settings
    pub schema: ConfigSchema,
    /// File the settings came from, if any
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit path must exist. Without one, the standard locations are
    /// searched and defaults are used when none is present.
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(p) = path {
            if !Path::new(p).exists() {
                return Err(Error::config_not_found(p));
            }
        }

        let config_path = path.map(String::from).or_else(find_config_file);

        let schema = if let Some(ref p) = config_path {
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };

        validate(&schema)?;

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<String> {
    let candidates = [".boikot.toml", "boikot.toml", ".config/boikot.toml"];

    for candidate in candidates {
        if Path::new(candidate).exists() {
            return Some(candidate.to_string());
        }
    }

    None
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &str) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::config(format!("Failed to read config file {}: {}", path, e)).with_source(e)
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::from(e).with_context(format!("While parsing config file {}", path))
    })
}

fn validate(schema: &ConfigSchema) -> Result<()> {
    let matching = &schema.matching;
    if !(0.0..=1.0).contains(&matching.threshold) {
        return Err(Error::config_validation(format!(
            "matching.threshold must be within [0, 1], got {}",
            matching.threshold
        )));
    }
    if !(0.0..=1.0).contains(&matching.fuzzy_min_ratio) {
        return Err(Error::config_validation(format!(
            "matching.fuzzy_min_ratio must be within [0, 1], got {}",
            matching.fuzzy_min_ratio
        )));
    }
    if schema.cache.enabled && schema.cache.capacity == 0 {
        return Err(Error::config_validation("cache.capacity must be at least 1")
            .with_suggestion("Set cache.enabled = false to turn the cache off"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert_eq!(config.schema.matching.threshold, 0.7);
    }

    #[test]
    fn test_config_load_explicit_file() {
        let file = write_config(
            "[source]\ndocument = \"list.txt\"\n\n[cache]\nenabled = true\ncapacity = 2\n",
        );
        let path = file.path().to_str().unwrap();

        let config = Config::load(Some(path)).unwrap();
        assert_eq!(config.path.as_deref(), Some(path));
        assert_eq!(config.schema.source.document, "list.txt");
        assert!(config.schema.cache.enabled);
        assert_eq!(config.schema.cache.capacity, 2);
    }

    #[test]
    fn test_config_missing_explicit_file() {
        let err = Config::load(Some("/definitely/not/here/boikot.toml")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_config_parse_error() {
        let file = write_config("[matching\nthreshold = ");
        let err = Config::load(Some(file.path().to_str().unwrap())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigParseError);
    }

    #[test]
    fn test_config_rejects_threshold_out_of_range() {
        let file = write_config("[matching]\nthreshold = 1.5\n");
        let err = Config::load(Some(file.path().to_str().unwrap())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigValidationError);
    }

    #[test]
    fn test_config_rejects_zero_capacity_when_enabled() {
        let file = write_config("[cache]\nenabled = true\ncapacity = 0\n");
        let err = Config::load(Some(file.path().to_str().unwrap())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigValidationError);

        let file = write_config("[cache]\nenabled = false\ncapacity = 0\n");
        assert!(Config::load(Some(file.path().to_str().unwrap())).is_ok());
    }
}
