use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, CurveKind};

/// Public chart configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Animate path shape changes (staged intro on first render).
    #[serde(default = "default_animation")]
    pub animation: bool,
    /// Interpolation the backend applies when stroking the series path.
    #[serde(default = "default_curve")]
    pub curve: CurveKind,
    /// Draw one marker per visible sample at its exact scaled coordinates.
    #[serde(default)]
    pub debug: bool,
    /// Margin subtracted from every viewport side to get the drawable area.
    #[serde(default = "default_margin")]
    pub margin: f64,
    /// Finest bucket the boundary walk may reach, as a catalog key.
    #[serde(default = "default_min_interval")]
    pub min_interval: String,
    #[serde(default = "default_stroke")]
    pub stroke: Color,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default)]
    pub y_tick_format: ValueFormat,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            animation: default_animation(),
            curve: default_curve(),
            debug: false,
            margin: default_margin(),
            min_interval: default_min_interval(),
            stroke: default_stroke(),
            stroke_width: default_stroke_width(),
            y_tick_format: ValueFormat::default(),
        }
    }
}

impl ChartConfig {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(ChartError::InvalidConfig(
                "margin must be finite and >= 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.stroke
            .validate()
            .map_err(|err| ChartError::InvalidConfig(err.to_string()))
    }
}

fn default_animation() -> bool {
    true
}

fn default_curve() -> CurveKind {
    CurveKind::Cardinal { tension: 0.75 }
}

fn default_margin() -> f64 {
    40.0
}

fn default_min_interval() -> String {
    "1h".to_owned()
}

fn default_stroke() -> Color {
    // light blue
    Color::rgb(0.678, 0.847, 0.902)
}

fn default_stroke_width() -> f64 {
    2.0
}

/// Vertical-axis label format, parsed from a d3-format-style spec string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueFormat {
    /// `".<precision>%"`: value scaled by 100 with a percent sign.
    Percent { precision: u8 },
    /// `".<precision>f"`: fixed-point decimal.
    Decimal { precision: u8 },
    /// `"d"`: rounded integer.
    Integer,
}

impl Default for ValueFormat {
    fn default() -> Self {
        Self::Percent { precision: 0 }
    }
}

impl ValueFormat {
    #[must_use]
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Percent { precision } => {
                format!("{:.*}%", usize::from(precision), value * 100.0)
            }
            Self::Decimal { precision } => format!("{:.*}", usize::from(precision), value),
            Self::Integer => format!("{}", value.round() as i64),
        }
    }
}

impl FromStr for ValueFormat {
    type Err = ChartError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        if spec == "d" {
            return Ok(Self::Integer);
        }

        let invalid = || ChartError::InvalidConfig(format!("unrecognized format spec `{spec}`"));

        let rest = spec.strip_prefix('.').ok_or_else(invalid)?;
        if rest.len() < 2 {
            return Err(invalid());
        }
        let (digits, suffix) = rest.split_at(rest.len() - 1);
        let precision: u8 = digits.parse().map_err(|_| invalid())?;

        match suffix {
            "%" => Ok(Self::Percent { precision }),
            "f" => Ok(Self::Decimal { precision }),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_specs_parse() {
        assert_eq!(
            ".0%".parse::<ValueFormat>().expect("percent spec"),
            ValueFormat::Percent { precision: 0 }
        );
        assert_eq!(
            ".2f".parse::<ValueFormat>().expect("decimal spec"),
            ValueFormat::Decimal { precision: 2 }
        );
        assert_eq!(
            "d".parse::<ValueFormat>().expect("integer spec"),
            ValueFormat::Integer
        );
    }

    #[test]
    fn bad_spec_is_invalid_config() {
        let err = "%0.".parse::<ValueFormat>().expect_err("must reject");
        assert!(matches!(err, ChartError::InvalidConfig(_)));
    }

    #[test]
    fn percent_scales_by_one_hundred() {
        let format = ValueFormat::Percent { precision: 0 };
        assert_eq!(format.format(0.5), "50%");
        assert_eq!(format.format(100.0), "10000%");
    }

    #[test]
    fn decimal_and_integer_formats() {
        assert_eq!(ValueFormat::Decimal { precision: 2 }.format(1.005), "1.00");
        assert_eq!(ValueFormat::Integer.format(41.6), "42");
    }
}
