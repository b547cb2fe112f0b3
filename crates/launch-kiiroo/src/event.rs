//! Single Kiiroo event
//!
//! Wire form: `<seconds>:<value>`, e.g. `1.00:2`.
//! Seconds are written with two decimal places; value is an intensity
//! level in [MIN_VALUE, MAX_VALUE].

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::{KiirooError, KiirooResult};

/// Lowest intensity level
pub const MIN_VALUE: u8 = 0;

/// Highest intensity level
pub const MAX_VALUE: u8 = 4;

/// Separator between the seconds and value fields
pub const EVENT_SEPARATOR: char = ':';

/// One control point on a Kiiroo timeline
///
/// Fields are private: every constructor validates the value range, so an
/// `Event` always holds a value in [MIN_VALUE, MAX_VALUE] and a time with
/// millisecond resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Event {
    time: Duration,
    value: u8,
}

impl Event {
    /// Create an event, truncating `time` to whole milliseconds
    pub fn new(time: Duration, value: u8) -> KiirooResult<Self> {
        let millis = u64::try_from(time.as_millis()).map_err(|_| KiirooError::EventFormat)?;
        Self::from_millis(millis, value)
    }

    pub fn from_millis(millis: u64, value: u8) -> KiirooResult<Self> {
        check_value(value)?;
        Ok(Event {
            time: Duration::from_millis(millis),
            value,
        })
    }

    /// Offset from the start of the timeline
    #[inline]
    pub fn time(&self) -> Duration {
        self.time
    }

    #[inline]
    pub fn millis(&self) -> u64 {
        // Always constructed from a u64 millisecond count
        self.time.as_millis() as u64
    }

    /// Intensity level
    #[inline]
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Encode to wire text
    pub fn encode(&self) -> KiirooResult<String> {
        check_value(self.value)?;
        Ok(self.to_string())
    }

    /// Decode from wire text
    ///
    /// The timestamp is the seconds field truncated (not rounded) to whole
    /// milliseconds. Any failure is `KiirooError::EventFormat`.
    pub fn decode(text: &str) -> KiirooResult<Self> {
        let mut fields = text.split(EVENT_SEPARATOR);
        let (secs, value) = match (fields.next(), fields.next(), fields.next()) {
            (Some(secs), Some(value), None) => (secs, value),
            _ => return Err(reject(text, "expected exactly one separator")),
        };

        let millis = parse_millis(secs).ok_or_else(|| reject(text, "invalid seconds"))?;

        let value = value
            .parse::<i16>()
            .ok()
            .and_then(|v| u8::try_from(v).ok())
            .filter(|v| (MIN_VALUE..=MAX_VALUE).contains(v))
            .ok_or_else(|| reject(text, "invalid value"))?;

        Ok(Event {
            time: Duration::from_millis(millis),
            value,
        })
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}{}{}",
            self.time.as_secs_f64(),
            EVENT_SEPARATOR,
            self.value
        )
    }
}

impl FromStr for Event {
    type Err = KiirooError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Event::decode(s)
    }
}

#[inline]
fn check_value(value: u8) -> KiirooResult<()> {
    if (MIN_VALUE..=MAX_VALUE).contains(&value) {
        Ok(())
    } else {
        Err(KiirooError::EventFormat)
    }
}

fn reject(text: &str, reason: &str) -> KiirooError {
    tracing::debug!("Rejected event {:?}: {}", text, reason);
    KiirooError::EventFormat
}

/// Parse a seconds field into whole milliseconds
///
/// Truncation works on the decimal digits of the value, not on the binary
/// product `secs * 1000.0`: `2.01 * 1000.0` is 2009.99.. in f64.
fn parse_millis(token: &str) -> Option<u64> {
    let secs: f64 = token.parse().ok()?;
    if !secs.is_finite() || secs < 0.0 {
        return None;
    }
    // -0.0 would display as "-0"
    if secs == 0.0 {
        return Some(0);
    }

    // Display of f64 is the shortest round-tripping decimal, never exponent form
    let decimal = secs.to_string();
    let (whole, frac) = decimal.split_once('.').unwrap_or((decimal.as_str(), ""));

    let mut millis = whole.parse::<u64>().ok()?.checked_mul(1000)?;
    let mut scale = 100;
    for digit in frac.bytes().take(3) {
        millis = millis.checked_add(u64::from(digit - b'0') * scale)?;
        scale /= 10;
    }
    Some(millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(millis: u64, value: u8) -> Event {
        Event::from_millis(millis, value).unwrap()
    }

    #[test]
    fn test_decode_basic() {
        let e = Event::decode("1.00:2").unwrap();
        assert_eq!(e.time(), Duration::from_millis(1000));
        assert_eq!(e.value(), 2);
    }

    #[test]
    fn test_encode_two_decimals() {
        assert_eq!(event(1000, 2).encode().unwrap(), "1.00:2");
        assert_eq!(event(0, 0).encode().unwrap(), "0.00:0");
        assert_eq!(event(500, 4).encode().unwrap(), "0.50:4");
        assert_eq!(event(12340, 1).encode().unwrap(), "12.34:1");
    }

    #[test]
    fn test_decode_bad_separator_count() {
        assert_eq!(Event::decode("bad"), Err(KiirooError::EventFormat));
        assert_eq!(Event::decode(""), Err(KiirooError::EventFormat));
        assert_eq!(Event::decode("1.00:2:3"), Err(KiirooError::EventFormat));
        assert_eq!(Event::decode(":"), Err(KiirooError::EventFormat));
    }

    #[test]
    fn test_decode_value_out_of_range() {
        assert_eq!(Event::decode("1.0:9"), Err(KiirooError::EventFormat));
        assert_eq!(Event::decode("1.0:-1"), Err(KiirooError::EventFormat));
        assert_eq!(Event::decode("1.0:5"), Err(KiirooError::EventFormat));
        assert_eq!(Event::decode("1.0:70000"), Err(KiirooError::EventFormat));
    }

    #[test]
    fn test_decode_non_numeric() {
        assert_eq!(Event::decode("a:1"), Err(KiirooError::EventFormat));
        assert_eq!(Event::decode("1.0:x"), Err(KiirooError::EventFormat));
        assert_eq!(Event::decode("1.0:1.5"), Err(KiirooError::EventFormat));
        assert_eq!(Event::decode(" 1.0:1"), Err(KiirooError::EventFormat));
        assert_eq!(Event::decode("1.0: 1"), Err(KiirooError::EventFormat));
    }

    #[test]
    fn test_decode_rejects_negative_and_non_finite_time() {
        assert_eq!(Event::decode("-1.00:1"), Err(KiirooError::EventFormat));
        assert_eq!(Event::decode("inf:1"), Err(KiirooError::EventFormat));
        assert_eq!(Event::decode("NaN:1"), Err(KiirooError::EventFormat));
        assert_eq!(Event::decode("1e300:1"), Err(KiirooError::EventFormat));
    }

    #[test]
    fn test_decode_truncates_to_millis() {
        assert_eq!(Event::decode("1.2349:1").unwrap().millis(), 1234);
        assert_eq!(Event::decode("0.0009:1").unwrap().millis(), 0);
        assert_eq!(Event::decode("2.01:1").unwrap().millis(), 2010);
        assert_eq!(Event::decode("8.03:1").unwrap().millis(), 8030);
    }

    #[test]
    fn test_decode_number_forms() {
        assert_eq!(Event::decode("1:3").unwrap().millis(), 1000);
        assert_eq!(Event::decode("1.5e1:3").unwrap().millis(), 15000);
        assert_eq!(Event::decode("+0.25:+3").unwrap(), event(250, 3));
        assert_eq!(Event::decode("-0.00:0").unwrap(), event(0, 0));
    }

    #[test]
    fn test_new_validates_value() {
        assert_eq!(
            Event::new(Duration::from_secs(1), 5),
            Err(KiirooError::EventFormat)
        );
        assert!(Event::new(Duration::from_secs(1), MAX_VALUE).is_ok());
    }

    #[test]
    fn test_new_truncates_sub_millis() {
        let e = Event::new(Duration::from_micros(1_999), 1).unwrap();
        assert_eq!(e.time(), Duration::from_millis(1));
    }

    #[test]
    fn test_roundtrip() {
        for (millis, value) in [(0, 0), (10, 1), (2010, 2), (59990, 3), (3_600_000, 4)] {
            let e = event(millis, value);
            assert_eq!(Event::decode(&e.encode().unwrap()).unwrap(), e);
        }
    }

    #[test]
    fn test_from_str() {
        let e: Event = "0.75:4".parse().unwrap();
        assert_eq!(e, event(750, 4));
        assert!("0.75".parse::<Event>().is_err());
    }
}
