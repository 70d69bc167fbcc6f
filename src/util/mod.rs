use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

pub mod pitching;
pub mod statsapi;

/// Rounds the exact binary value of `value` to `places` decimal places, ties to even.
/// 6.125 becomes 6.12 while 4.35 (stored as 4.3499..) becomes 4.3.
pub fn round_to(value: f64, places: u32) -> f64 {
    let Some(exact) = Decimal::from_f64_retain(value) else { return value };
    exact
        .round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
        .to_string()
        .parse::<f64>()
        .unwrap_or(value)
}

/// Shortest form that reads back as the same float, always with a fractional part ("1.0", "0.29").
pub fn decimal(value: f64) -> String {
    let s = value.to_string();
    if s.contains('.') || !value.is_finite() { s } else { format!("{s}.0") }
}

/// The stats API prints most rate stats as strings ("3.45", "180.1") and counts as numbers.
/// Accepts either; anything unparseable or non-finite ("-.--", "∞") is treated as absent.
pub fn number(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse::<f64>().ok()))
        .filter(|x| x.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rounds_to_places() {
        assert_eq!(round_to(0.7777, 2), 0.78);
        assert_eq!(round_to(18.04, 1), 18.0);
        assert_eq!(round_to(0.290909, 3), 0.291);
        assert_eq!(round_to(0.66666, 3), 0.667);
    }

    #[test]
    fn rounds_exact_ties_to_even() {
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(6.125, 2), 6.12);
        assert_eq!(round_to(6.375, 2), 6.38);
        assert_eq!(round_to(18.25, 1), 18.2);
        assert_eq!(round_to(18.75, 1), 18.8);
        assert_eq!(round_to(-0.125, 2), -0.12);
    }

    #[test]
    fn rounds_what_is_stored_not_what_is_written() {
        // 4.35 and 2.675 sit just below their written halves
        assert_eq!(round_to(4.35, 1), 4.3);
        assert_eq!(round_to(2.675, 2), 2.67);
    }

    #[test]
    fn prints_shortest_decimal() {
        assert_eq!(decimal(1.0), "1.0");
        assert_eq!(decimal(0.29), "0.29");
        assert_eq!(decimal(0.291), "0.291");
        assert_eq!(decimal(0.0), "0.0");
        assert_eq!(decimal(18.0), "18.0");
    }

    #[test]
    fn reads_numbers_and_numeric_strings() {
        assert_eq!(number(&json!(12)), Some(12.0));
        assert_eq!(number(&json!("3.45")), Some(3.45));
        assert_eq!(number(&json!("180.1")), Some(180.1));
        assert_eq!(number(&json!("-.--")), None);
        assert_eq!(number(&json!("inf")), None);
        assert_eq!(number(&Value::Null), None);
    }
}
