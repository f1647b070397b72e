//! UIF Benefit Calculation Engine
//!
//! This crate implements the two statutory UIF benefit calculations published by the
//! Department of Employment & Labour: the unemployment benefit (capped daily income,
//! sliding income-replacement rate, credit days) and the paid-leave income top-up.
//!
//! Every calculation is a pure, synchronous function over scalar inputs. There is no
//! shared state, no I/O, and no transport layer; a front end parses raw input into
//! the numeric types, calls in, and renders the returned record or error.

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod models;
