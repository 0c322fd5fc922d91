// Copyright 2025 KPK Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Operand parsing for user-supplied query values.
//!
//! The service never rejects a request because of a bad operand: anything
//! that is missing or unparseable becomes 0. [`Operand`] keeps track of where
//! the value came from so callers can still tell a literal `0` apart from a
//! default.

use serde::Serialize;
use tracing::debug;

use crate::error::OperandError;

/// How an [`Operand`] value was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperandSource {
    /// The raw value parsed as an integer.
    Parsed,
    /// No value was supplied; defaulted to 0.
    Missing,
    /// A value was supplied but did not parse; defaulted to 0.
    Invalid,
}

/// An integer operand plus its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Operand {
    /// The value used for computation.
    pub value: i64,
    /// Whether the value was parsed or defaulted.
    pub source: OperandSource,
}

impl Operand {
    /// Build an operand from an optional raw query value, defaulting to 0.
    pub fn from_query(raw: Option<&str>) -> Self {
        match parse_operand(raw) {
            Ok(value) => Self {
                value,
                source: OperandSource::Parsed,
            },
            Err(err) => {
                debug!(error = %err, "Operand defaulted to 0");
                Self {
                    value: 0,
                    source: match err {
                        OperandError::Missing => OperandSource::Missing,
                        OperandError::Invalid { .. } => OperandSource::Invalid,
                    },
                }
            }
        }
    }

    /// True when the value was not parsed from user input.
    pub fn is_defaulted(&self) -> bool {
        self.source != OperandSource::Parsed
    }
}

/// Parse a decimal integer: an optional `+` or `-` followed by ASCII digits,
/// within `i64` range. Surrounding whitespace is not accepted.
pub fn parse_operand(raw: Option<&str>) -> Result<i64, OperandError> {
    let raw = match raw {
        None | Some("") => return Err(OperandError::Missing),
        Some(raw) => raw,
    };
    raw.parse::<i64>().map_err(|e| OperandError::Invalid {
        raw: raw.to_string(),
        reason: e.to_string(),
    })
}
