use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Errors from loading or validating an inertia configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error("unknown acceleration policy `{0}` (expected `ceiling` or `floor`)")]
    UnknownPolicy(String),
}

/// How a drag move raises the acceleration level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccelerationPolicy {
    /// `min(level + step, max_level)`: a true clamp.
    #[default]
    Ceiling,
    /// `max(level + step, max_level)`: never below `max_level` after a drag
    /// move, and grows without bound while dragging continues.
    Floor,
}

impl AccelerationPolicy {
    /// Level after one drag move, starting from `level`.
    pub fn raise(self, level: u32, step: u32, max_level: u32) -> u32 {
        let raised = level.saturating_add(step);
        match self {
            Self::Ceiling => raised.min(max_level),
            Self::Floor => raised.max(max_level),
        }
    }
}

impl fmt::Display for AccelerationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ceiling => f.write_str("ceiling"),
            Self::Floor => f.write_str("floor"),
        }
    }
}

impl FromStr for AccelerationPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ceiling" => Ok(Self::Ceiling),
            "floor" => Ok(Self::Floor),
            other => Err(ConfigError::UnknownPolicy(other.to_string())),
        }
    }
}

/// Tuning constants for drag inertia.
///
/// Every field is optional in JSON; missing fields take the defaults
/// (step 3, max level 10, scale 0.015, ceiling policy).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InertiaConfig {
    /// Level added by each drag move.
    pub step: u32,
    /// Bound applied by the [`AccelerationPolicy`].
    pub max_level: u32,
    /// Degrees of rotation per pixel of drag per acceleration level.
    pub scale: f32,
    pub policy: AccelerationPolicy,
}

impl Default for InertiaConfig {
    fn default() -> Self {
        Self {
            step: 3,
            max_level: 10,
            scale: 0.015,
            policy: AccelerationPolicy::Ceiling,
        }
    }
}

impl InertiaConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded inertia config");
        Ok(config)
    }

    /// Defaults, or the file at `path` when given, with `policy` overriding
    /// whatever the file says.
    pub fn resolve(
        path: Option<&Path>,
        policy: Option<AccelerationPolicy>,
    ) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(match policy {
            Some(policy) => config.with_policy(policy),
            None => config,
        })
    }

    pub fn with_policy(self, policy: AccelerationPolicy) -> Self {
        Self { policy, ..self }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step == 0 {
            return Err(ConfigError::Invalid {
                field: "step",
                reason: "must be at least 1".into(),
            });
        }
        if self.max_level == 0 {
            return Err(ConfigError::Invalid {
                field: "max_level",
                reason: "must be at least 1".into(),
            });
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "scale",
                reason: format!("must be a positive finite number, got {}", self.scale),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_demo_constants() {
        let c = InertiaConfig::default();
        assert_eq!(c.step, 3);
        assert_eq!(c.max_level, 10);
        assert_eq!(c.scale, 0.015);
        assert_eq!(c.policy, AccelerationPolicy::Ceiling);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn ceiling_clamps_to_max() {
        let p = AccelerationPolicy::Ceiling;
        assert_eq!(p.raise(0, 3, 10), 3);
        assert_eq!(p.raise(6, 3, 10), 9);
        assert_eq!(p.raise(9, 3, 10), 10);
        assert_eq!(p.raise(10, 3, 10), 10);
    }

    #[test]
    fn floor_raises_to_max_and_keeps_growing() {
        let p = AccelerationPolicy::Floor;
        assert_eq!(p.raise(0, 3, 10), 10);
        assert_eq!(p.raise(10, 3, 10), 13);
        assert_eq!(p.raise(u32::MAX - 1, 3, 10), u32::MAX);
    }

    #[test]
    fn policy_parses_case_insensitively() {
        assert_eq!("Floor".parse::<AccelerationPolicy>().unwrap(), AccelerationPolicy::Floor);
        assert_eq!(
            " ceiling ".parse::<AccelerationPolicy>().unwrap(),
            AccelerationPolicy::Ceiling
        );
        assert!(matches!(
            "clamp".parse::<AccelerationPolicy>(),
            Err(ConfigError::UnknownPolicy(_))
        ));
        assert_eq!(AccelerationPolicy::Floor.to_string(), "floor");
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c = InertiaConfig::from_json_str(r#"{ "policy": "floor" }"#).unwrap();
        assert_eq!(c.policy, AccelerationPolicy::Floor);
        assert_eq!(c.step, 3);
        assert_eq!(c.max_level, 10);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = InertiaConfig::from_json_str(r#"{ "max_level": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "max_level", .. }));

        let err = InertiaConfig::from_json_str(r#"{ "step": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "step", .. }));

        let err = InertiaConfig::from_json_str(r#"{ "scale": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "scale", .. }));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = InertiaConfig::from_json_str("{ step: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "step": 2, "scale": 0.03 }}"#).unwrap();
        let c = InertiaConfig::load(file.path()).unwrap();
        assert_eq!(c.step, 2);
        assert_eq!(c.scale, 0.03);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = InertiaConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn resolve_applies_policy_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "policy": "floor", "max_level": 12 }}"#).unwrap();

        let from_file = InertiaConfig::resolve(Some(file.path()), None).unwrap();
        assert_eq!(from_file.policy, AccelerationPolicy::Floor);
        assert_eq!(from_file.max_level, 12);

        let overridden =
            InertiaConfig::resolve(Some(file.path()), Some(AccelerationPolicy::Ceiling)).unwrap();
        assert_eq!(overridden.policy, AccelerationPolicy::Ceiling);
        assert_eq!(overridden.max_level, 12);

        assert_eq!(InertiaConfig::resolve(None, None).unwrap(), InertiaConfig::default());
    }

    #[test]
    fn with_policy_overrides_only_policy() {
        let c = InertiaConfig::default().with_policy(AccelerationPolicy::Floor);
        assert_eq!(c.policy, AccelerationPolicy::Floor);
        assert_eq!(c.max_level, 10);
    }
}
