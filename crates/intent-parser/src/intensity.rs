//! Magnitude extraction for set-intensity commands

use regex::Regex;
use std::sync::OnceLock;

#[allow(clippy::expect_used)]
fn percent_regex() -> &'static Regex {
    static PERCENT_REGEX: OnceLock<Regex> = OnceLock::new();
    PERCENT_REGEX.get_or_init(|| {
        Regex::new(r"([0-9]+)\s*(%|percent)").expect("Invalid regex pattern - this is a bug")
    })
}

#[allow(clippy::expect_used)]
fn number_regex() -> &'static Regex {
    static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
    NUMBER_REGEX.get_or_init(|| {
        Regex::new(r"(?-u:\b)([0-9]+)(?-u:\b)").expect("Invalid regex pattern - this is a bug")
    })
}

/// Extract an intensity from a lowercased utterance.
///
/// Only ASCII digits count as numbers. A number followed by `%` or `percent`
/// is taken as is. Otherwise the first standalone integer is used, scaled by
/// ten when it is between 1 and 10 and the text does not mention
/// "temperature" ("fan speed 5" means 50%). Values are not range checked here.
pub fn extract_intensity(text: &str) -> Option<i64> {
    if let Some(caps) = percent_regex().captures(text) {
        return caps.get(1).and_then(|m| m.as_str().parse::<i64>().ok());
    }

    let caps = number_regex().captures(text)?;
    let value = caps.get(1)?.as_str().parse::<i64>().ok()?;
    if !text.contains("temperature") && (1..=10).contains(&value) {
        Some(value * 10)
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_is_verbatim() {
        assert_eq!(extract_intensity("set the fan to 7%"), Some(7));
        assert_eq!(extract_intensity("set brightness to 45 percent"), Some(45));
        assert_eq!(extract_intensity("set brightness to 5 %"), Some(5));
    }

    #[test]
    fn test_percent_takes_priority_over_earlier_number() {
        assert_eq!(extract_intensity("set light 2 brightness to 30%"), Some(30));
    }

    #[test]
    fn test_small_numbers_scaled() {
        assert_eq!(extract_intensity("set the fan speed to 7"), Some(70));
        assert_eq!(extract_intensity("set the fan speed to 10"), Some(100));
        assert_eq!(extract_intensity("set the fan speed to 1"), Some(10));
    }

    #[test]
    fn test_zero_and_large_not_scaled() {
        assert_eq!(extract_intensity("set the brightness to 0"), Some(0));
        assert_eq!(extract_intensity("set the brightness to 11"), Some(11));
        assert_eq!(extract_intensity("set the brightness to 250"), Some(250));
    }

    #[test]
    fn test_temperature_suppresses_scaling() {
        assert_eq!(extract_intensity("set the temperature to 7"), Some(7));
        assert_eq!(extract_intensity("set the temperature to 68"), Some(68));
    }

    #[test]
    fn test_first_standalone_number() {
        assert_eq!(extract_intensity("set level 40 then 60"), Some(40));
        // digits glued to letters are not standalone
        assert_eq!(extract_intensity("set room2 level to 55"), Some(55));
    }

    #[test]
    fn test_only_ascii_digits_count() {
        assert_eq!(extract_intensity("set level \u{0663} to 40"), Some(40));
        assert_eq!(extract_intensity("set level \u{0663}\u{0660}% to 40%"), Some(40));
        assert_eq!(extract_intensity("set level \u{0663} please"), None);
    }

    #[test]
    fn test_no_number() {
        assert_eq!(extract_intensity("set the brightness higher"), None);
    }

    #[test]
    fn test_overflow_is_none() {
        assert_eq!(
            extract_intensity("set the level to 99999999999999999999999"),
            None
        );
    }
}
