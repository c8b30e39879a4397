//! Configuration validation.

use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;
use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_search(config, &mut result);
        Self::validate_logging(config, &mut result);

        Ok(result)
    }

    fn validate_search(config: &Config, result: &mut ValidationResult) {
        if config.search.include_scrollable {
            result.add_warning(ValidationWarning::new(
                "search.include_scrollable",
                "scrollable detection inspects every element under the container and resolves style for each overflowing one",
            ));
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.trim();
        if level.is_empty() {
            result.add_error(ValidationError::new(
                "logging.level",
                "Log level cannot be empty",
            ));
        } else if let Err(e) = EnvFilter::try_new(level) {
            result.add_error(ValidationError::new(
                "logging.level",
                format!("Invalid filter directive \"{}\": {}", level, e),
            ));
        }

        if let Some(dir) = &config.logging.dir {
            if dir.trim().is_empty() {
                result.add_error(ValidationError::new(
                    "logging.dir",
                    "Log directory cannot be empty; omit it to log to the console only",
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
