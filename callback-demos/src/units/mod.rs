//! The demo units
//!
//! Each unit is independent: a producer, a caller that takes the producer
//! (or an inline closure) as its callback, and a `run` driver that wires the
//! two together and logs to a [`Console`](crate::console::Console).
//!
//! [`welcome`] is the odd one out: it composes two plain functions and
//! takes no callback at all.

pub mod greet;
pub mod number;
pub mod record;
pub mod welcome;
