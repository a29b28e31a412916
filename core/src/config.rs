//! Configuration for the diff engine.
//!
//! `DiffConfig` carries the tracked-field list and the behavioral knobs the
//! source system hardcoded, so callers decide what counts as a reportable
//! change instead of the engine.

use crate::error_codes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What to do when two features in one snapshot resolve to the same key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// The later feature in iteration order overwrites the earlier one.
    /// This is a known, accepted information loss, not an error.
    #[default]
    LastWriteWins,
    /// The earlier feature is kept and later duplicates are ignored.
    FirstWriteWins,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Property names monitored for modification, in report order.
    pub tracked_fields: Vec<String>,
    /// Duplicate-key handling during index construction.
    pub collision_policy: CollisionPolicy,
    /// When set, coordinate drift on a matched feature is reported as a
    /// trailing `coordinate` pseudo-field change.
    pub track_coordinates: bool,
}

impl DiffConfig {
    pub fn with_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tracked_fields: fields.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn builder() -> DiffConfigBuilder {
        DiffConfigBuilder {
            inner: DiffConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (position, field) in self.tracked_fields.iter().enumerate() {
            if field.trim().is_empty() {
                return Err(ConfigError::EmptyTrackedField { position });
            }
            if self.tracked_fields[..position].contains(field) {
                return Err(ConfigError::DuplicateTrackedField {
                    field: field.clone(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("[GJDIFF_CFG_001] tracked field at position {position} is empty. Suggestion: remove the entry or give it a property name.")]
    EmptyTrackedField { position: usize },
    #[error("[GJDIFF_CFG_002] tracked field '{field}' is listed more than once. Suggestion: deduplicate the tracked-field list.")]
    DuplicateTrackedField { field: String },
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::EmptyTrackedField { .. } => error_codes::CONFIG_EMPTY_TRACKED_FIELD,
            ConfigError::DuplicateTrackedField { .. } => {
                error_codes::CONFIG_DUPLICATE_TRACKED_FIELD
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DiffConfigBuilder {
    inner: DiffConfig,
}

impl DiffConfigBuilder {
    pub fn new() -> Self {
        DiffConfig::builder()
    }

    pub fn tracked_field(mut self, field: impl Into<String>) -> Self {
        self.inner.tracked_fields.push(field.into());
        self
    }

    pub fn tracked_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner
            .tracked_fields
            .extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.inner.collision_policy = policy;
        self
    }

    pub fn track_coordinates(mut self, value: bool) -> Self {
        self.inner.track_coordinates = value;
        self
    }

    pub fn build(self) -> Result<DiffConfig, ConfigError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}
