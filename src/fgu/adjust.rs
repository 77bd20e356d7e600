//! Portal width/length adjustments
//!
//! Tokens are either a percentage of the grid size (`25%`) or an absolute
//! pixel count (`10px`). The resulting offset is halved because it is applied
//! on both sides of a portal segment.

use std::str::FromStr;

use crate::error::{ConvertError, Result};

/// A validated adjustment token
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjustment {
    Percent(f64),
    Pixels(f64),
}

impl Adjustment {
    /// Half offset in pixels for a grid of `grid_size` pixels
    pub fn to_pixels(self, grid_size: f64) -> f64 {
        match self {
            // Never thinner than one pixel
            Adjustment::Percent(pct) => (grid_size * pct / 100.0).max(1.0) / 2.0,
            Adjustment::Pixels(px) => px / 2.0,
        }
    }
}

/// `digits` or `digits.digits`
fn parse_decimal(s: &str) -> Option<f64> {
    let (int, frac) = match s.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (s, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int) || frac.is_some_and(|frac| !all_digits(frac)) {
        return None;
    }
    s.parse().ok()
}

impl FromStr for Adjustment {
    type Err = ConvertError;

    fn from_str(token: &str) -> Result<Self> {
        let parsed = if let Some(num) = token.strip_suffix('%') {
            parse_decimal(num).map(Adjustment::Percent)
        } else if let Some(num) = token.strip_suffix("px") {
            parse_decimal(num).map(Adjustment::Pixels)
        } else {
            None
        };
        parsed.ok_or_else(|| ConvertError::MalformedAdjustmentToken {
            token: token.to_string(),
        })
    }
}

impl std::fmt::Display for Adjustment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Adjustment::Percent(pct) => write!(f, "{pct}%"),
            Adjustment::Pixels(px) => write!(f, "{px}px"),
        }
    }
}

/// Parse `token` and convert it to a half offset in pixels
pub fn parse_adjustment(token: &str, grid_size: f64) -> Result<f64> {
    Ok(token.parse::<Adjustment>()?.to_pixels(grid_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(parse_adjustment("25%", 100.0).unwrap(), 12.5);
        assert_eq!(parse_adjustment("12.5%", 200.0).unwrap(), 12.5);
    }

    #[test]
    fn test_percentage_clamped_before_halving() {
        assert_eq!(parse_adjustment("0%", 100.0).unwrap(), 0.5);
        assert_eq!(parse_adjustment("0.5%", 100.0).unwrap(), 0.5);
        // zero grid size still yields a usable portal
        assert_eq!(parse_adjustment("25%", 0.0).unwrap(), 0.5);
    }

    #[test]
    fn test_pixels() {
        assert_eq!(parse_adjustment("10px", 100.0).unwrap(), 5.0);
        assert_eq!(parse_adjustment("10px", 0.0).unwrap(), 5.0);
        assert_eq!(parse_adjustment("0px", 256.0).unwrap(), 0.0);
        assert_eq!(parse_adjustment("3.5px", 256.0).unwrap(), 1.75);
    }

    #[test]
    fn test_malformed_tokens() {
        for token in ["abc", "", "%", "px", "10", "10 px", "-5%", "1.%", ".5px", "5%%", "1e3px"] {
            assert!(
                matches!(
                    parse_adjustment(token, 100.0),
                    Err(ConvertError::MalformedAdjustmentToken { .. })
                ),
                "{token:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_round_trip() {
        let adj: Adjustment = "25%".parse().unwrap();
        assert_eq!(adj, Adjustment::Percent(25.0));
        assert_eq!(adj.to_string(), "25%");
        assert_eq!("4px".parse::<Adjustment>().unwrap().to_string(), "4px");
    }
}
