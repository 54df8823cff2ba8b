//! Dimension choice: a priced tier or explicit measurements.

use crate::ids::OptionId;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Smallest accepted width or height, in centimeters.
pub const MIN_DIMENSION_CM: u32 = 50;
/// Largest accepted width or height, in centimeters.
pub const MAX_DIMENSION_CM: u32 = 300;
/// Starting width and height of the per-product configurator.
pub const DEFAULT_DIMENSION_CM: u32 = 100;

/// How the customer sized the product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Dimension {
    /// One of the fixed tiers of the option table.
    Tier { id: OptionId },
    /// Explicit measurements, clamped on construction and on deserialize.
    Measured {
        #[serde(deserialize_with = "deserialize_clamped")]
        width_cm: u32,
        #[serde(deserialize_with = "deserialize_clamped")]
        height_cm: u32,
    },
}

impl Dimension {
    /// Measurements with both axes clamped to the accepted range.
    pub fn measured(width_cm: i64, height_cm: i64) -> Self {
        Dimension::Measured {
            width_cm: clamp_dimension(width_cm),
            height_cm: clamp_dimension(height_cm),
        }
    }

    /// The 100 × 100 cm starting size.
    pub fn reference() -> Self {
        Dimension::Measured {
            width_cm: DEFAULT_DIMENSION_CM,
            height_cm: DEFAULT_DIMENSION_CM,
        }
    }

    pub fn tier_id(&self) -> Option<&OptionId> {
        match self {
            Dimension::Tier { id } => Some(id),
            Dimension::Measured { .. } => None,
        }
    }

    /// `(width, height)` for measured dimensions.
    pub fn measurements(&self) -> Option<(u32, u32)> {
        match self {
            Dimension::Measured {
                width_cm,
                height_cm,
            } => Some((*width_cm, *height_cm)),
            Dimension::Tier { .. } => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Tier { id } => write!(f, "{}", id),
            Dimension::Measured {
                width_cm,
                height_cm,
            } => write!(f, "{} × {} cm", width_cm, height_cm),
        }
    }
}

/// Measured axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Width,
    Height,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Width => "width",
            Axis::Height => "height",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "width" | "largeur" | "w" => Some(Axis::Width),
            "height" | "hauteur" | "h" => Some(Axis::Height),
            _ => None,
        }
    }
}

/// Clamp a raw slider or button value into `[MIN_DIMENSION_CM, MAX_DIMENSION_CM]`.
pub fn clamp_dimension(value: i64) -> u32 {
    value.clamp(i64::from(MIN_DIMENSION_CM), i64::from(MAX_DIMENSION_CM)) as u32
}

fn deserialize_clamped<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    i64::deserialize(deserializer).map(clamp_dimension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_dimension() {
        assert_eq!(clamp_dimension(400), 300);
        assert_eq!(clamp_dimension(10), 50);
        assert_eq!(clamp_dimension(-20), 50);
        assert_eq!(clamp_dimension(175), 175);
        assert_eq!(clamp_dimension(50), 50);
        assert_eq!(clamp_dimension(300), 300);
    }

    #[test]
    fn test_measured_clamps_both_axes() {
        assert_eq!(
            Dimension::measured(1000, 0),
            Dimension::Measured {
                width_cm: 300,
                height_cm: 50
            }
        );
    }

    #[test]
    fn test_dimension_serde_is_tagged() {
        let json = serde_json::to_value(Dimension::reference()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"mode": "measured", "width_cm": 100, "height_cm": 100})
        );
        let tier: Dimension =
            serde_json::from_str(r#"{"mode": "tier", "id": "sur-mesure-moyen"}"#).unwrap();
        assert_eq!(tier.tier_id().unwrap(), "sur-mesure-moyen");
        assert!(tier.measurements().is_none());
    }

    #[test]
    fn test_deserialize_clamps_measurements() {
        let dimension: Dimension = serde_json::from_str(
            r#"{"mode": "measured", "width_cm": 4294967295, "height_cm": -3}"#,
        )
        .unwrap();
        assert_eq!(dimension.measurements(), Some((300, 50)));

        let dimension: Dimension =
            serde_json::from_str(r#"{"mode": "measured", "width_cm": 180, "height_cm": 120}"#)
                .unwrap();
        assert_eq!(dimension, Dimension::measured(180, 120));

        // beyond i64 is not a measurement at all
        assert!(serde_json::from_str::<Dimension>(
            r#"{"mode": "measured", "width_cm": 18446744073709551615, "height_cm": 100}"#
        )
        .is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Dimension::measured(120, 80).to_string(), "120 × 80 cm");
        assert_eq!(Axis::from_str("Largeur"), Some(Axis::Width));
    }
}
