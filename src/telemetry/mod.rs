// SPDX-License-Identifier: MPL-2.0
//! Telemetry observations consumed by status widgets.
//!
//! A [`Keyword`] is a named observation from the control system carrying
//! values tagged with a [`Severity`]. A [`ValueSlice`] picks which of those
//! values a consumer should look at; its meaning beyond that is left to the
//! consumer.

pub mod keyword;

pub use keyword::{Keyword, KeywordValue, Severity, Value, ValueSlice};
