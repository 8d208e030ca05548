//! Engine configuration. There is very little to configure, since conversions are pure: only how
//! much the failure paths log. `Config` is serde-friendly so hosts can keep it alongside their own
//! settings in whatever format they already use.

use crate::report::{self, LogMode};

/// Settings for the conversion engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// How much the engine logs when it substitutes a default.
    #[serde(default)]
    pub log_mode: LogMode,
}

impl Config {
    /// A configuration that logs nothing.
    pub fn quiet() -> Config {
        Config {
            log_mode: LogMode::Quiet,
        }
    }

    /// A configuration that also logs which defaults were substituted.
    pub fn debug() -> Config {
        Config {
            log_mode: LogMode::Debug,
        }
    }

    /// Installs this configuration process-wide.
    pub fn apply(&self) {
        report::set_log_mode(self.log_mode);
    }

    /// The configuration currently in effect.
    pub fn current() -> Config {
        Config {
            log_mode: report::log_mode(),
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_deserialize_config() {
        let config: Config = serde_json::from_str(r#"{"log_mode": "debug"}"#).unwrap();
        assert_eq!(config, Config::debug());
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.log_mode, LogMode::Normal);
        assert!(serde_json::from_str::<Config>(r#"{"log_mode": "loud"}"#).is_err());
    }

    #[test]
    fn test_constructors() {
        assert_eq!(Config::quiet().log_mode, LogMode::Quiet);
        assert_eq!(Config::default().log_mode, LogMode::Normal);
    }
}
