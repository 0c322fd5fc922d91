// Copyright 2025 KPK Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for the core crate.

use thiserror::Error;

/// Why an operand could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperandError {
    /// No value was supplied.
    #[error("operand is missing")]
    Missing,

    /// The value is not a decimal integer in `i64` range.
    #[error("invalid operand {raw:?}: {reason}")]
    Invalid {
        /// The raw text as received.
        raw: String,
        /// Parser error message.
        reason: String,
    },
}
