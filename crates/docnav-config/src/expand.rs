//! `${VAR}` / `${VAR:-default}` expansion for configuration strings.

use crate::ConfigError;

/// Expand environment variable references in a configuration value.
///
/// Values without `${` are returned unchanged. An unset variable without a
/// default is an error naming the config field.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var)
            .map(Some)
            .map_err(|_| UnsetVar(var.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Name of a variable that could not be resolved.
struct UnsetVar(String);
