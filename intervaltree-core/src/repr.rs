//! Reconstructable textual form of an [`Interval`].
//!
//! An interval renders as `Interval(<begin>, <end>)`, or as
//! `Interval(<begin>, <end>, <data>)` when it carries a payload. Every field
//! is written as a JSON literal, so strings come out quoted and numbers bare:
//!
//! ```
//! use intervaltree_core::models::Interval;
//!
//! let iv: Interval<u32, String> = Interval::with_data(1, 5, "x".to_string());
//! assert_eq!(iv.to_string(), r#"Interval(1, 5, "x")"#);
//!
//! let parsed: Interval<u32, String> = iv.to_string().parse().unwrap();
//! assert_eq!(parsed, iv);
//! ```
//!
//! Which form is used depends only on whether a payload is present, never on
//! its value: `Some(0)` and `Some("")` still produce three fields.
//!
//! Non-finite floats are written as `null` and do not parse back. Fields are
//! decoded straight from their text, so 128-bit integers round-trip exactly.
use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;

use crate::errors::{IntervalError, Result};
use crate::models::Interval;

const PREFIX: &str = "Interval(";
const SUFFIX: &str = ")";

impl<P, D> Interval<P, D>
where
    P: Serialize,
    D: Serialize,
{
    ///
    /// Render the textual form of this interval.
    ///
    /// # Errors
    ///
    /// [`IntervalError::Json`] if a field can't be written as JSON.
    ///
    pub fn to_repr(&self) -> Result<String> {
        let (begin, end, data) = self.fields();
        let begin = serde_json::to_string(begin)?;
        let end = serde_json::to_string(end)?;

        match data {
            Some(data) => {
                let data = serde_json::to_string(data)?;
                Ok(format!("{PREFIX}{begin}, {end}, {data}{SUFFIX}"))
            }
            None => Ok(format!("{PREFIX}{begin}, {end}{SUFFIX}")),
        }
    }
}

impl<P, D> Interval<P, D>
where
    P: DeserializeOwned,
    D: DeserializeOwned,
{
    ///
    /// Rebuild an interval from its textual form.
    ///
    /// # Errors
    ///
    /// [`IntervalError::ReprParse`] if the text isn't a two or three field
    /// `Interval(...)` form, [`IntervalError::Json`] if a field doesn't
    /// decode into the expected type.
    ///
    pub fn from_repr(text: &str) -> Result<Self> {
        let inner = text
            .trim()
            .strip_prefix(PREFIX)
            .and_then(|rest| rest.strip_suffix(SUFFIX))
            .ok_or_else(|| parse_error(format!("expected `Interval(...)`, got {text:?}")))?;

        // the field list is a JSON array without its brackets; fields stay raw
        // so each one is decoded straight from its text
        let wrapped = format!("[{inner}]");
        let fields: Vec<&RawValue> = serde_json::from_str(&wrapped)
            .map_err(|e| parse_error(format!("malformed fields in {text:?}: {e}")))?;

        match fields.as_slice() {
            [begin, end] => Ok(Interval::new(decode_field(begin)?, decode_field(end)?)),
            [begin, end, data] => Ok(Interval::with_data(
                decode_field(begin)?,
                decode_field(end)?,
                decode_field(data)?,
            )),
            _ => Err(parse_error(format!(
                "expected 2 or 3 fields, got {} in {text:?}",
                fields.len()
            ))),
        }
    }
}

fn decode_field<T: DeserializeOwned>(raw: &RawValue) -> Result<T> {
    Ok(serde_json::from_str(raw.get())?)
}

/// JSON literal of a field, or its `Debug` form when it has no JSON rendering.
fn render_field<T: Serialize + Debug>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::trace!("field has no JSON form ({e}), rendering with Debug");
        format!("{value:?}")
    })
}

fn parse_error(message: String) -> IntervalError {
    log::debug!("{message}");
    IntervalError::ReprParse(message)
}

/// Same text as [`Interval::to_repr`] whenever that succeeds. A field that
/// can't be written as JSON is shown with its `Debug` form instead, which
/// does not parse back.
impl<P, D> Display for Interval<P, D>
where
    P: Serialize + Debug,
    D: Serialize + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (begin, end, data) = self.fields();
        write!(f, "{PREFIX}{}, {}", render_field(begin), render_field(end))?;
        if let Some(data) = data {
            write!(f, ", {}", render_field(data))?;
        }
        f.write_str(SUFFIX)
    }
}

impl<P, D> FromStr for Interval<P, D>
where
    P: DeserializeOwned,
    D: DeserializeOwned,
{
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self> {
        Interval::from_repr(s)
    }
}
