//! Weight string parsing.
//!
//! Accepts `"<number> <unit>"` and `"<number><unit>"`, normalizing the unit
//! to `kg` or `lbs`.

use crate::error::WeightError;
use crate::types::{Weight, WeightUnit};
use std::str::FromStr;

/// Parse a weight string such as `"315lbs"`, `"68.5 kg"` or `"100kgs"`
pub fn parse_weight(input: &str) -> Result<Weight, WeightError> {
    let input = input.trim();

    if input.contains(' ') {
        let mut parts = input.split(' ');
        let number = parts.next().unwrap_or_default();
        let token = parts.next().unwrap_or_default();

        let unit = match token.to_lowercase().as_str() {
            "lbs" => WeightUnit::Lbs,
            "kg" | "kgs" => WeightUnit::Kg,
            _ => return Err(WeightError::UnknownUnit(token.to_string())),
        };
        return Ok(Weight::new(parse_number(input, number)?, unit));
    }

    // Unit glued to the number; "lbs" is checked before "kg"
    let lowered = input.to_ascii_lowercase();
    for (suffix, unit) in [("lbs", WeightUnit::Lbs), ("kg", WeightUnit::Kg)] {
        if let Some(pos) = lowered.find(suffix) {
            return Ok(Weight::new(parse_number(input, &input[..pos])?, unit));
        }
    }

    Err(WeightError::UnknownUnit(input.to_string()))
}

fn parse_number(input: &str, number: &str) -> Result<f64, WeightError> {
    number
        .parse::<f64>()
        .map_err(|source| WeightError::InvalidNumber {
            input: input.to_string(),
            source,
        })
}

impl FromStr for Weight {
    type Err = WeightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_weight(s)
    }
}
