//! Converter configuration
//!
//! Settings resolve in the same order tolc uses for its classpath:
//! explicit setters win, then environment variables, then built-in defaults.

use std::env;

use crate::common::consts::{ENV_DROP_UNMAPPABLE, ENV_MARKER_ANNOTATION, ICICLE_ANNOTATION};
use crate::common::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fully-qualified name of the marker annotation searched on ancestors
    pub marker_annotation: String,
    /// Drop fields whose type has no Bundle accessor instead of keeping them
    /// with an empty method suffix
    pub drop_unmappable_fields: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker_annotation: ICICLE_ANNOTATION.to_string(),
            drop_unmappable_fields: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from `ICICLE_MARKER_ANNOTATION` and `ICICLE_DROP_UNMAPPABLE`
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(marker) = env::var(ENV_MARKER_ANNOTATION) {
            if !marker.is_empty() {
                log::debug!("config: marker annotation from {}: {}", ENV_MARKER_ANNOTATION, marker);
                config.marker_annotation = marker;
            }
        }

        if let Ok(flag) = env::var(ENV_DROP_UNMAPPABLE) {
            config.drop_unmappable_fields = parse_flag(ENV_DROP_UNMAPPABLE, &flag)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_marker_annotation(mut self, marker: impl Into<String>) -> Self {
        self.marker_annotation = marker.into();
        self
    }

    pub fn with_drop_unmappable_fields(mut self, drop: bool) -> Self {
        self.drop_unmappable_fields = drop;
        self
    }

    /// Reject marker names that can never match a qualified annotation type.
    /// A bare simple name is an annotation in the default package.
    pub fn validate(&self) -> Result<()> {
        let marker = self.marker_annotation.trim();
        if marker.is_empty() {
            return Err(Error::config("marker annotation must not be empty"));
        }
        if marker.split('.').any(|segment| segment.is_empty()) {
            return Err(Error::config(format!(
                "marker annotation '{}' has an empty name segment",
                marker
            )));
        }
        Ok(())
    }
}

fn parse_flag(var: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::config(format!("{} has invalid boolean value '{}'", var, other))),
    }
}
