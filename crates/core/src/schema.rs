//! The default classifier: YAML 1.1 core tag resolution and scalar
//! construction.
//!
//! Implicit tags are resolved by trying each rule in order (bool, float,
//! int, merge, null, timestamp, value) and falling back to `str`.

use std::sync::{Arc, LazyLock};

use base64::Engine;
use regex::Regex;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

use crate::tag::{Classifier, TagName};

static BOOL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:yes|Yes|YES|no|No|NO|true|True|TRUE|false|False|FALSE|on|On|ON|off|Off|OFF|y|Y|n|N)$")
        .unwrap()
});

static FLOAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:[-+]?(?:[0-9][0-9_]*)\.[0-9_]*(?:[eE][-+]?[0-9]+)?",
        r"|\.[0-9_]+(?:[eE][-+]?[0-9]+)?",
        r"|[-+]?[0-9][0-9_]*(?::[0-5]?[0-9])+\.[0-9_]*",
        r"|[-+]?\.(?:inf|Inf|INF)",
        r"|\.(?:nan|NaN|NAN))$",
    ))
    .unwrap()
});

static INT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:[-+]?0b[0-1_]+",
        r"|[-+]?0[0-7_]+",
        r"|[-+]?(?:0|[1-9][0-9_]*)",
        r"|[-+]?0x[0-9a-fA-F_]+",
        r"|[-+]?[1-9][0-9_]*(?::[0-5]?[0-9])+)$",
    ))
    .unwrap()
});

static NULL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:~|null|Null|NULL|)$").unwrap());

static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<year>[0-9]{4})-(?P<month>[0-9]{1,2})-(?P<day>[0-9]{1,2})",
        r"(?:(?:[Tt]|[ \t]+)(?P<hour>[0-9]{1,2}):(?P<minute>[0-9]{2}):(?P<second>[0-9]{2})",
        r"(?:\.(?P<fraction>[0-9]*))?",
        r"(?:[ \t]*(?P<tz>Z|(?P<tz_sign>[-+])(?P<tz_hour>[0-9]{1,2})(?::(?P<tz_minute>[0-9]{2}))?))?)?$",
    ))
    .unwrap()
});

static CORE: LazyLock<Arc<CoreSchema>> = LazyLock::new(|| Arc::new(CoreSchema));

/// The shared default classifier.
pub fn core() -> Arc<dyn Classifier> {
    let schema: Arc<CoreSchema> = Arc::clone(&CORE);
    schema
}

/// YAML 1.1 core schema.
#[derive(Debug, Default, Clone, Copy)]
pub struct CoreSchema;

impl Classifier for CoreSchema {
    fn classify(&self, text: &str) -> TagName {
        if BOOL_RE.is_match(text) {
            TagName::BOOL
        } else if FLOAT_RE.is_match(text) {
            TagName::FLOAT
        } else if INT_RE.is_match(text) {
            TagName::INT
        } else if text == "<<" {
            TagName::MERGE
        } else if NULL_RE.is_match(text) {
            TagName::NULL
        } else if TIMESTAMP_RE.is_match(text) {
            TagName::TIMESTAMP
        } else if text == "=" {
            TagName::VALUE
        } else {
            TagName::STR
        }
    }
}

pub fn is_null(text: &str) -> bool {
    NULL_RE.is_match(text)
}

pub fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "true" | "True" | "TRUE" | "yes" | "Yes" | "YES" | "on" | "On" | "ON" | "y" | "Y" => {
            Some(true)
        }
        "false" | "False" | "FALSE" | "no" | "No" | "NO" | "off" | "Off" | "OFF" | "n" | "N" => {
            Some(false)
        }
        _ => None,
    }
}

/// Splits an optional leading sign off `text`.
fn split_sign(text: &str) -> (i64, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (-1, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (1, rest)
    } else {
        (1, text)
    }
}

/// Base-60 digits such as `1:30:05`, most significant first.
fn sexagesimal(text: &str) -> Option<i64> {
    text.split(':').try_fold(0i64, |acc, part| {
        let digit: i64 = part.parse().ok()?;
        acc.checked_mul(60)?.checked_add(digit)
    })
}

pub fn parse_int(text: &str) -> Option<i64> {
    if !INT_RE.is_match(text) {
        return None;
    }
    let cleaned = text.replace('_', "");
    let (sign, digits) = split_sign(&cleaned);
    // Fold the magnitude wider than i64 so `-9223372036854775808` fits.
    let magnitude: i128 = if let Some(bin) = digits.strip_prefix("0b") {
        i128::from_str_radix(bin, 2).ok()?
    } else if let Some(hex) = digits.strip_prefix("0x") {
        i128::from_str_radix(hex, 16).ok()?
    } else if digits.contains(':') {
        i128::from(sexagesimal(digits)?)
    } else if digits.len() > 1 && digits.starts_with('0') {
        i128::from_str_radix(&digits[1..], 8).ok()?
    } else {
        digits.parse::<i128>().ok()?
    };
    i64::try_from(magnitude.checked_mul(i128::from(sign))?).ok()
}

pub fn parse_float(text: &str) -> Option<f64> {
    match text {
        ".inf" | ".Inf" | ".INF" | "+.inf" | "+.Inf" | "+.INF" => return Some(f64::INFINITY),
        "-.inf" | "-.Inf" | "-.INF" => return Some(f64::NEG_INFINITY),
        ".nan" | ".NaN" | ".NAN" => return Some(f64::NAN),
        _ => {}
    }
    if !FLOAT_RE.is_match(text) && !INT_RE.is_match(text) {
        return None;
    }
    let cleaned = text.replace('_', "");
    if cleaned.contains(':') {
        let (sign, digits) = split_sign(&cleaned);
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        let whole = sexagesimal(whole)? as f64;
        let fraction: f64 = if fraction.is_empty() {
            0.0
        } else {
            format!("0.{}", fraction).parse().ok()?
        };
        return Some(sign as f64 * (whole + fraction));
    }
    if INT_RE.is_match(text) && !FLOAT_RE.is_match(text) {
        return parse_int(text).map(|i| i as f64);
    }
    cleaned.parse().ok()
}

pub fn parse_timestamp(text: &str) -> Option<OffsetDateTime> {
    let caps = TIMESTAMP_RE.captures(text)?;
    let number = |name: &str| -> Option<u32> { caps.name(name)?.as_str().parse().ok() };

    let month = Month::try_from(u8::try_from(number("month")?).ok()?).ok()?;
    let date = Date::from_calendar_date(
        caps.name("year")?.as_str().parse().ok()?,
        month,
        u8::try_from(number("day")?).ok()?,
    )
    .ok()?;

    if caps.name("hour").is_none() {
        return Some(PrimitiveDateTime::new(date, Time::MIDNIGHT).assume_utc());
    }

    let nanos = match caps.name("fraction").map(|m| m.as_str()) {
        Some(f) if !f.is_empty() => {
            let padded: String = f.chars().chain(std::iter::repeat('0')).take(9).collect();
            padded.parse().ok()?
        }
        _ => 0,
    };
    let time = Time::from_hms_nano(
        u8::try_from(number("hour")?).ok()?,
        u8::try_from(number("minute")?).ok()?,
        u8::try_from(number("second")?).ok()?,
        nanos,
    )
    .ok()?;

    let offset = match caps.name("tz_sign").map(|m| m.as_str()) {
        Some(sign) => {
            let hours = i8::try_from(number("tz_hour")?).ok()?;
            let minutes = i8::try_from(number("tz_minute").unwrap_or(0)).ok()?;
            let (hours, minutes) = if sign == "-" {
                (-hours, -minutes)
            } else {
                (hours, minutes)
            };
            UtcOffset::from_hms(hours, minutes, 0).ok()?
        }
        None => UtcOffset::UTC,
    };

    Some(PrimitiveDateTime::new(date, time).assume_offset(offset))
}

pub fn parse_binary(text: &str) -> Option<Vec<u8>> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    base64::engine::general_purpose::STANDARD
        .decode(compact)
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn classify_core_rules() {
        let schema = CoreSchema;
        assert_eq!(schema.classify("yes"), TagName::BOOL);
        assert_eq!(schema.classify("False"), TagName::BOOL);
        assert_eq!(schema.classify("3.14"), TagName::FLOAT);
        assert_eq!(schema.classify(".inf"), TagName::FLOAT);
        assert_eq!(schema.classify("42"), TagName::INT);
        assert_eq!(schema.classify("0x1F"), TagName::INT);
        assert_eq!(schema.classify("<<"), TagName::MERGE);
        assert_eq!(schema.classify("~"), TagName::NULL);
        assert_eq!(schema.classify(""), TagName::NULL);
        assert_eq!(schema.classify("2001-12-14"), TagName::TIMESTAMP);
        assert_eq!(schema.classify("="), TagName::VALUE);
        assert_eq!(schema.classify("hello"), TagName::STR);
    }

    #[test]
    fn integers_in_every_base() {
        assert_eq!(parse_int("685230"), Some(685230));
        assert_eq!(parse_int("+685_230"), Some(685230));
        assert_eq!(parse_int("02472256"), Some(685230));
        assert_eq!(parse_int("0x_0A_74_AE"), Some(685230));
        assert_eq!(parse_int("0b1010_0111_0100_1010_1110"), Some(685230));
        assert_eq!(parse_int("190:20:30"), Some(685230));
        assert_eq!(parse_int("-17"), Some(-17));
        assert_eq!(parse_int("0"), Some(0));
        assert_eq!(parse_int("12abc"), None);
        assert_eq!(parse_int("99999999999999999999"), None);
    }

    #[test]
    fn integer_range_edges() {
        assert_eq!(parse_int("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_int("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_int("9223372036854775808"), None);
        assert_eq!(parse_int("-0x8000000000000000"), Some(i64::MIN));
    }

    #[test]
    fn floats() {
        assert_eq!(parse_float("6.8523015e+5"), Some(685230.15));
        assert_eq!(parse_float("685.230_15e+03"), Some(685230.15));
        let sexagesimal = parse_float("190:20:30.15").unwrap();
        assert!((sexagesimal - 685230.15).abs() < 1e-6);
        assert_eq!(parse_float("-.inf"), Some(f64::NEG_INFINITY));
        assert!(parse_float(".NaN").is_some_and(f64::is_nan));
        assert_eq!(parse_float("7"), Some(7.0));
        assert_eq!(parse_float("inf"), None);
        assert_eq!(parse_float("seven"), None);
    }

    #[test]
    fn booleans_and_null() {
        assert_eq!(parse_bool("on"), Some(true));
        assert_eq!(parse_bool("N"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
        assert!(is_null("~"));
        assert!(is_null("NULL"));
        assert!(!is_null("nil"));
    }

    #[test]
    fn timestamps() {
        assert_eq!(
            parse_timestamp("2002-12-14"),
            Some(datetime!(2002-12-14 0:00 UTC))
        );
        assert_eq!(
            parse_timestamp("2001-12-14t21:59:43.10-05:00"),
            Some(datetime!(2001-12-14 21:59:43.1 -5))
        );
        assert_eq!(
            parse_timestamp("2001-12-14 21:59:43.10 -5"),
            Some(datetime!(2001-12-14 21:59:43.1 -5))
        );
        assert_eq!(
            parse_timestamp("2001-12-15 2:59:43.10"),
            Some(datetime!(2001-12-15 2:59:43.1 UTC))
        );
        assert_eq!(parse_timestamp("2001-13-01"), None);
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn binary_ignores_line_breaks() {
        assert_eq!(parse_binary("aGVs\nbG8="), Some(b"hello".to_vec()));
        assert_eq!(parse_binary("not base64!"), None);
    }
}
