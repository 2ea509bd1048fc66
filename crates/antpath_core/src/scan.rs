//! Sensor scan decoding.
//!
//! A scan line holds the scan origin followed by repeating
//! `angle, range, tag` triples:
//!
//! ```text
//! originX,originY,angle1,range1,tag1,angle2,range2,tag2,...
//! ```
//!
//! Angles are radians measured from the +Y axis, so a reading converts to
//! `(ox + range * sin(angle), oy + range * cos(angle))`.

use crate::error::FieldError;
use antpath_data::SensorTag;

pub const DEFAULT_DELIMITERS: &str = ",";

/// Splits `line` on any character in `delimiters`.
///
/// Runs of delimiters collapse and leading/trailing delimiters are dropped,
/// so no token is ever empty. A blank line yields no tokens.
#[must_use]
pub fn tokenize<'a>(line: &'a str, delimiters: &str) -> Vec<&'a str> {
    line.split(|c: char| delimiters.contains(c))
        .filter(|token| !token.is_empty())
        .collect()
}

/// One raw polar observation within a scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarReading {
    pub angle: f64,
    pub range: f64,
    pub tag: SensorTag,
}

/// A classified reading converted to sensor-space Cartesian coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading {
    pub x: f64,
    pub y: f64,
    pub tag: SensorTag,
}

impl PolarReading {
    #[must_use]
    pub fn to_cartesian(&self, origin: (f64, f64)) -> SensorReading {
        SensorReading {
            x: origin.0 + self.range * self.angle.sin(),
            y: origin.1 + self.range * self.angle.cos(),
            tag: self.tag,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scan {
    pub origin: (f64, f64),
    pub readings: Vec<PolarReading>,
}

impl Scan {
    /// Decodes one line of a scan log.
    ///
    /// Returns `Ok(None)` for a blank line. `line_no` is only used in the
    /// error message.
    pub fn parse(
        line: &str,
        delimiters: &str,
        line_no: usize,
    ) -> Result<Option<Self>, FieldError> {
        let tokens: Vec<&str> = tokenize(line, delimiters)
            .into_iter()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.is_empty() {
            return Ok(None);
        }
        if tokens.len() < 2 {
            return Err(FieldError::malformed(line_no, "missing scan origin"));
        }
        let reading_tokens = &tokens[2..];
        if reading_tokens.len() % 3 != 0 {
            return Err(FieldError::malformed(
                line_no,
                format!(
                    "{} reading tokens is not a multiple of 3",
                    reading_tokens.len()
                ),
            ));
        }

        let origin = (
            parse_number(tokens[0], line_no)?,
            parse_number(tokens[1], line_no)?,
        );
        let readings = reading_tokens
            .chunks_exact(3)
            .map(|triple| {
                Ok(PolarReading {
                    angle: parse_number(triple[0], line_no)?,
                    range: parse_number(triple[1], line_no)?,
                    tag: SensorTag::from_token(triple[2]),
                })
            })
            .collect::<Result<Vec<_>, FieldError>>()?;

        Ok(Some(Self { origin, readings }))
    }

    /// Classified readings in Cartesian form. `None` readings are dropped
    /// here, before any geometry is computed.
    pub fn classified(&self) -> impl Iterator<Item = SensorReading> + '_ {
        self.readings
            .iter()
            .filter(|r| r.tag.is_classified())
            .map(move |r| r.to_cartesian(self.origin))
    }
}

fn parse_number(token: &str, line_no: usize) -> Result<f64, FieldError> {
    let value: f64 = token
        .parse()
        .map_err(|_| FieldError::malformed(line_no, format!("'{token}' is not a number")))?;
    if !value.is_finite() {
        return Err(FieldError::malformed(
            line_no,
            format!("'{token}' is not finite"),
        ));
    }
    Ok(value)
}
