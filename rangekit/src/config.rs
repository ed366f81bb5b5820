//! Slider configuration types.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::intent::Intent;
use crate::utils::numeric::decimal_precision;

/// Domain and display configuration shared by slider widgets.
///
/// Every field has a default, so partial JSON objects deserialize:
///
/// ```
/// use rangekit::config::SliderConfig;
///
/// let config = SliderConfig::from_json(r#"{ "max": 100, "step_size": 2 }"#).unwrap();
/// assert_eq!(config.min, 0.0);
/// assert_eq!(config.max, 100.0);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Lower bound of the domain.
    pub min: f64,

    /// Upper bound of the domain.
    pub max: f64,

    /// Increment between successive handle values.
    pub step_size: f64,

    /// Increment between successive axis labels.
    pub label_step_size: f64,

    /// Decimal places used for labels (None = inferred from `step_size`).
    pub label_precision: Option<usize>,

    /// Lay the track out bottom-to-top instead of left-to-right.
    pub vertical: bool,

    /// Ignore all input.
    pub disabled: bool,

    /// Intent of fill segments whose neighboring handles don't pick one.
    pub default_track_intent: Intent,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10.0,
            step_size: 1.0,
            label_step_size: 1.0,
            label_precision: None,
            vertical: false,
            disabled: false,
            default_track_intent: Intent::None,
        }
    }
}

impl SliderConfig {
    /// Create a config spanning `[min, max]`.
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            ..Default::default()
        }
    }

    /// Parse and validate a JSON config.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the handle step size.
    pub fn step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    /// Set the axis label step size.
    pub fn label_step_size(mut self, label_step_size: f64) -> Self {
        self.label_step_size = label_step_size;
        self
    }

    /// Set the number of decimal places for labels.
    pub fn label_precision(mut self, precision: usize) -> Self {
        self.label_precision = Some(precision);
        self
    }

    /// Set vertical orientation.
    pub fn vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }

    /// Set the disabled flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the fallback intent of fill segments.
    pub fn default_track_intent(mut self, intent: Intent) -> Self {
        self.default_track_intent = intent;
        self
    }

    /// Check that the domain and steps are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("min", self.min),
            ("max", self.max),
            ("step_size", self.step_size),
            ("label_step_size", self.label_step_size),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        if self.min >= self.max {
            return Err(ConfigError::EmptyDomain {
                min: self.min,
                max: self.max,
            });
        }

        for (field, value) in [
            ("step_size", self.step_size),
            ("label_step_size", self.label_step_size),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveStep { field, value });
            }
        }

        Ok(())
    }

    /// Decimal places for labels: explicit precision, else the step's.
    pub fn effective_label_precision(&self) -> usize {
        self.label_precision
            .unwrap_or_else(|| decimal_precision(self.step_size))
    }

    /// Domain-value to normalized-offset conversion factor.
    pub fn tick_size_ratio(&self) -> f64 {
        1.0 / (self.max - self.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SliderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_domain() {
        let err = SliderConfig::new(5.0, 5.0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::EmptyDomain { .. }));
    }

    #[test]
    fn test_rejects_non_positive_step() {
        let err = SliderConfig::new(0.0, 10.0).step_size(0.0).validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositiveStep {
                field: "step_size",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        let err = SliderConfig::new(f64::NAN, 10.0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::NotFinite { field: "min", .. }));
    }

    #[test]
    fn test_label_precision_from_step() {
        assert_eq!(SliderConfig::default().effective_label_precision(), 0);
        assert_eq!(
            SliderConfig::default().step_size(0.25).effective_label_precision(),
            2
        );
        assert_eq!(
            SliderConfig::default()
                .step_size(0.25)
                .label_precision(1)
                .effective_label_precision(),
            1
        );
    }

    #[test]
    fn test_from_json() {
        let config = SliderConfig::from_json(
            r#"{ "min": 0, "max": 100, "step_size": 2, "vertical": true,
                 "default_track_intent": "warning" }"#,
        )
        .unwrap();
        assert_eq!(config.max, 100.0);
        assert!(config.vertical);
        assert_eq!(config.default_track_intent, Intent::Warning);
        assert_eq!(config.tick_size_ratio(), 0.01);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            SliderConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SliderConfig::from_json(r#"{ "min": 10, "max": 0 }"#),
            Err(ConfigError::EmptyDomain { .. })
        ));
    }
}
