// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Time related utils.
//!
//! All instants handled by this crate are UTC by type. Text without an
//! explicit offset is assumed to be UTC as well.

use std::fmt::Debug;

use chrono::NaiveDateTime;
use chrono::Utc;

use crate::{Error, Result};

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Timestamp layout without offset, fractional seconds are optional.
const NAIVE_ISO8601: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Clock provides the current instant.
///
/// Everything that needs "now" should ask a clock instead of calling [`now`]
/// directly, so that callers can pin time in tests.
pub trait Clock: Debug + Send + Sync + 'static {
    /// Return the current instant in UTC.
    fn now(&self) -> DateTime;
}

/// SystemClock reads the wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime {
        now()
    }
}

/// FixedClock always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime);

impl Clock for FixedClock {
    fn now(&self) -> DateTime {
        self.0
    }
}

/// Format time into the round-trip form with 100ns precision:
/// `2022-03-13T07:20:04.1234567Z`
///
/// Sub-100ns digits are truncated.
pub fn format_round_trip(t: DateTime) -> String {
    // chrono has no 7 digit fraction specifier.
    // Leap seconds carry nanos >= 1s, fold them back into the fraction.
    let ticks = t.timestamp_subsec_nanos() % 1_000_000_000 / 100;
    format!("{}.{:07}Z", t.format("%Y-%m-%dT%H:%M:%S"), ticks)
}

/// Parse time from RFC3339.
///
/// All of the following are valid:
///
/// - `2022-03-13T07:20:04Z`
/// - `2022-03-13T07:20:04.0000000Z`
/// - `2022-03-01T08:12:34+00:00`
/// - `2022-03-01T08:12:34.00+08:00`
pub fn parse_rfc3339(s: &str) -> Result<DateTime> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|v| v.with_timezone(&Utc))
        .map_err(|e| {
            Error::credential_invalid(format!("failed to parse rfc3339 time: {s}")).with_source(e)
        })
}

/// Parse time from the ISO-8601 round-trip form.
///
/// This accepts everything [`parse_rfc3339`] accepts, plus timestamps that
/// carry no offset at all (`2022-03-13T07:20:04.1234567`), which are taken
/// as UTC. Leading and trailing whitespace is ignored.
pub fn parse_round_trip(s: &str) -> Result<DateTime> {
    let s = s.trim();
    if let Ok(t) = chrono::DateTime::parse_from_rfc3339(s) {
        return Ok(t.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(s, NAIVE_ISO8601)
        .map(|v| v.and_utc())
        .map_err(|e| {
            Error::credential_invalid(format!("failed to parse round-trip time: {s}"))
                .with_source(e)
        })
}
