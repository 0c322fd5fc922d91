// Copyright 2025 KPK Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Core algorithms for the KPK (least common multiple) benchmark.
//!
//! # Modules
//!
//! - [`lcm`] - Iterative and recursive LCM variants plus the closed form
//! - [`operand`] - Lenient parsing of user-supplied operands
//! - [`error`] - Error types

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod error;
pub mod lcm;
pub mod operand;

pub use error::OperandError;
pub use lcm::{gcd, lcm, lcm_iterative, lcm_recursive};
pub use operand::{parse_operand, Operand, OperandSource};
