//! Registration settings loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::DEFAULT_WELCOME_MESSAGE;
use crate::telemetry::LogFormat;

/// Configuration values controlling registration behaviour and logging.
///
/// Values are layered from defaults, configuration files, `REGISTRATION_*`
/// environment variables and command-line flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "REGISTRATION")]
pub struct RegistrationSettings {
    /// Body of the message sent to newly registered users.
    pub welcome_message: Option<String>,
    /// Emit JSON log lines instead of human-readable output.
    pub json_logs: Option<bool>,
}

impl RegistrationSettings {
    /// Return the configured welcome message, falling back to the default.
    pub fn welcome_message(&self) -> &str {
        self.welcome_message
            .as_deref()
            .unwrap_or(DEFAULT_WELCOME_MESSAGE)
    }

    /// Return the log output format, JSON unless disabled.
    pub fn log_format(&self) -> LogFormat {
        if self.json_logs.unwrap_or(true) {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for registration configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> RegistrationSettings {
        RegistrationSettings::load_from_iter([OsString::from("registration")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("REGISTRATION_WELCOME_MESSAGE", None::<String>),
            ("REGISTRATION_JSON_LOGS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.welcome_message(), DEFAULT_WELCOME_MESSAGE);
        assert!(settings.json_logs.is_none());
        assert_eq!(settings.log_format(), LogFormat::Json);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "REGISTRATION_WELCOME_MESSAGE",
                Some("hello from the team".to_owned()),
            ),
            ("REGISTRATION_JSON_LOGS", Some("false".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.welcome_message(), "hello from the team");
        assert_eq!(settings.json_logs, Some(false));
        assert_eq!(settings.log_format(), LogFormat::Pretty);
    }

    #[rstest]
    fn json_logs_enabled_explicitly_keeps_json() {
        let _guard = lock_env([
            ("REGISTRATION_WELCOME_MESSAGE", None::<String>),
            ("REGISTRATION_JSON_LOGS", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.json_logs, Some(true));
        assert_eq!(settings.log_format(), LogFormat::Json);
    }
}
