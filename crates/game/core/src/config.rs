//! Search configuration supplied once when an agent is constructed.

use crate::error::{ErrorSeverity, GameError};

/// Which static evaluation policy scores leaves and orders children.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EvaluatorKind {
    /// Nearest-opponent distance signed by line of sight, plus a closing bonus.
    #[default]
    LineOfSight,
    /// Weighted Manhattan distance and attack-threat counts.
    Proximity,
}

/// Tunable parameters of one minimax agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Plies to look ahead. A ply is one side moving all of its units.
    pub depth: u32,
    /// Static evaluation policy.
    #[cfg_attr(feature = "serde", serde(default))]
    pub evaluator: EvaluatorKind,
}

impl SearchConfig {
    pub const DEFAULT_DEPTH: u32 = 2;

    /// Creates a configuration with the default evaluator.
    ///
    /// Fails when `depth` is zero: a search that looks at no plies cannot
    /// produce an action.
    pub fn new(depth: u32) -> Result<Self, ConfigError> {
        let config = Self {
            depth,
            evaluator: EvaluatorKind::default(),
        };
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_evaluator(mut self, evaluator: EvaluatorKind) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Re-checks a configuration that was built field by field (e.g. deserialized).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::InvalidDepth { depth: self.depth });
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: Self::DEFAULT_DEPTH,
            evaluator: EvaluatorKind::default(),
        }
    }
}

/// Errors raised while building a [`SearchConfig`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    #[error("search depth must be at least 1 (got {depth})")]
    InvalidDepth { depth: u32 },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidDepth { .. } => "CONFIG_INVALID_DEPTH",
        }
    }
}
