//! Loosely typed filter input.
//!
//! Filter operations accept whatever the host hands them (form input, URL
//! parameters, JSON). Before a value reaches a query it is normalized to a
//! signed integer by [`FilterValue::to_integer`]: anything that does not start
//! with a number becomes `0` instead of being rejected.

use serde_json::Value;

/// Whitespace skipped before the number: space, `\t`, `\n`, `\v`, `\f`, `\r`.
const LEADING_WHITESPACE: [char; 6] = [' ', '\t', '\n', '\x0b', '\x0c', '\r'];

/// A filter operand as received from the host.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    /// Arrays and objects; they always cast to `0`
    Compound,
}

impl FilterValue {
    /// Parse-or-zero integer cast.
    pub fn to_integer(&self) -> i64 {
        match self {
            FilterValue::Null | FilterValue::Compound => 0,
            FilterValue::Bool(b) => i64::from(*b),
            FilterValue::Integer(i) => *i,
            // `as` truncates toward zero, saturates, and maps NaN to 0
            FilterValue::Float(f) => *f as i64,
            FilterValue::Text(s) => parse_leading_integer(s),
        }
    }
}

/// Parse the leading integer of `input`.
///
/// Leading C-locale whitespace is skipped, one optional sign is accepted, then
/// the longest run of ASCII digits is read. Out-of-range values saturate.
/// Any other leading character (including Unicode spaces) yields `0`.
fn parse_leading_integer(input: &str) -> i64 {
    let trimmed = input.trim_start_matches(LEADING_WHITESPACE);
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut result: i64 = 0;
    for digit in rest.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(digit - b'0');
        result = if negative {
            result.saturating_mul(10).saturating_sub(digit)
        } else {
            result.saturating_mul(10).saturating_add(digit)
        };
    }
    result
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for FilterValue {
            fn from(v: $t) -> Self {
                FilterValue::Integer(i64::from(v))
            }
        })*
    };
}

macro_rules! impl_from_unsigned_wide {
    ($($t:ty),*) => {
        $(impl From<$t> for FilterValue {
            fn from(v: $t) -> Self {
                FilterValue::Integer(i64::try_from(v).unwrap_or(i64::MAX))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, u8, u16, u32);
impl_from_unsigned_wide!(u64, usize, isize);

impl From<f32> for FilterValue {
    fn from(v: f32) -> Self {
        FilterValue::Float(f64::from(v))
    }
}

impl From<f64> for FilterValue {
    fn from(v: f64) -> Self {
        FilterValue::Float(v)
    }
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        FilterValue::Bool(v)
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        FilterValue::Text(v.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        FilterValue::Text(v)
    }
}

impl<T: Into<FilterValue>> From<Option<T>> for FilterValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(FilterValue::Null, Into::into)
    }
}

impl From<Value> for FilterValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => FilterValue::Null,
            Value::Bool(b) => FilterValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FilterValue::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    FilterValue::from(u)
                } else {
                    FilterValue::Float(n.as_f64().unwrap_or_default())
                }
            }
            Value::String(s) => FilterValue::Text(s),
            Value::Array(_) | Value::Object(_) => FilterValue::Compound,
        }
    }
}
