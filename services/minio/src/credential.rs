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

use std::fmt::{Debug, Formatter};

use chrono::TimeDelta;
use log::warn;
use s3cred_core::time::{self, Clock, DateTime};
use s3cred_core::utils::Redact;
use s3cred_core::{Result, SigningCredential};

/// Credentials that hold the access key, secret key and, for temporary
/// credentials, a session token and an expiration.
///
/// Credentials are immutable once built. A refreshed set is a new value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_key: String,
    secret_key: String,
    session_token: Option<String>,
    expiration: Option<DateTime>,
}

impl Credentials {
    /// Create long-lived credentials without session token or expiration.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            session_token: None,
            expiration: None,
        }
    }

    /// Build credentials from raw fields where the expiration is text.
    ///
    /// An empty or whitespace-only session token is treated as absent. See
    /// [`Credentials::with_expiration_str`] for how the expiration is read.
    pub fn from_parts(
        access_key: &str,
        secret_key: &str,
        session_token: Option<&str>,
        expiration: Option<&str>,
    ) -> Result<Self> {
        let cred = Self::new(access_key, secret_key).with_expiration_str(expiration)?;
        Ok(match session_token.filter(|v| !v.trim().is_empty()) {
            Some(token) => cred.with_session_token(token),
            None => cred,
        })
    }

    /// Build credentials with session token.
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    /// Build credentials with an optional expiration.
    pub fn with_expiration(mut self, expiration: Option<DateTime>) -> Self {
        self.expiration = expiration;
        self
    }

    /// Build credentials with a structured expiration.
    ///
    /// `DateTime::default()` (the unix epoch) means "no expiration", so
    /// credentials can't be built to expire at exactly that instant through
    /// this method. Use [`Credentials::with_expiration`] to be explicit.
    ///
    /// This is the one input where the structured and textual paths differ:
    /// the text `1970-01-01T00:00:00Z` is a real, long expired instant, while
    /// the epoch passed here never expires.
    pub fn with_expiration_time(self, expiration: DateTime) -> Self {
        let expiration = (expiration != DateTime::default()).then_some(expiration);
        self.with_expiration(expiration)
    }

    /// Build credentials with a textual expiration.
    ///
    /// - `None`, empty or whitespace-only text means "no expiration".
    /// - Otherwise the text must be a round-trip ISO-8601 timestamp like
    ///   `2024-01-01T00:00:00.0000000Z`; text without offset is taken as UTC.
    ///
    /// Returns a `CredentialInvalid` error if the text can't be parsed.
    pub fn with_expiration_str(self, expiration: Option<&str>) -> Result<Self> {
        let expiration = parse_expiration(expiration)?;
        Ok(self.with_expiration(expiration))
    }

    /// Get access key.
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Get secret key.
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Get session token.
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    /// Get expiration, `None` for long-lived credentials.
    pub fn expiration(&self) -> Option<DateTime> {
        self.expiration
    }

    /// Are these temporary credentials?
    pub fn is_temporary(&self) -> bool {
        self.session_token.is_some() || self.expiration.is_some()
    }

    /// Check whether these credentials are expired at `now`.
    ///
    /// Credentials expire at their expiration instant, not after it: an
    /// expiration equal to `now` counts as expired. Credentials without
    /// expiration never expire.
    pub fn are_expired_at(&self, now: DateTime) -> bool {
        self.expiration.is_some_and(|expiration| expiration <= now)
    }

    /// Check whether these credentials are expired, sampling `clock` once.
    pub fn are_expired_with(&self, clock: &dyn Clock) -> bool {
        self.are_expired_at(clock.now())
    }

    /// Check whether these credentials are expired right now.
    ///
    /// Callers must obtain fresh credentials before sending further requests
    /// once this returns `true`.
    pub fn are_expired(&self) -> bool {
        self.are_expired_at(time::now())
    }

    /// Remaining lifetime at `now`.
    ///
    /// Returns `None` for credentials without expiration. The value is zero
    /// or negative once the credentials are expired.
    pub fn expires_in(&self, now: DateTime) -> Option<TimeDelta> {
        self.expiration.map(|expiration| expiration - now)
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &Redact::from(&self.access_key))
            .field("secret_key", &Redact::from(&self.secret_key))
            .field("session_token", &Redact::from(&self.session_token))
            .field("expiration", &self.expiration)
            .finish()
    }
}

impl SigningCredential for Credentials {
    fn is_valid_at(&self, now: DateTime) -> bool {
        if self.access_key.is_empty() || self.secret_key.is_empty() {
            return false;
        }

        !self.are_expired_at(now)
    }
}

/// Normalize a textual expiration into an optional instant.
pub(crate) fn parse_expiration(expiration: Option<&str>) -> Result<Option<DateTime>> {
    let Some(expiration) = expiration.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    time::parse_round_trip(expiration)
        .map(Some)
        .inspect_err(|e| warn!("credential expiration {expiration:?} is invalid: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use s3cred_core::time::{format_round_trip, FixedClock};
    use s3cred_core::ErrorKind;
    use test_case::test_case;

    fn test_now() -> DateTime {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    /// Resolve a scenario into the textual expiration: `None` offset keeps
    /// the raw text, otherwise the text is `test_now() + offset` in round-trip form.
    fn expiration_text(raw: Option<&str>, offset_minutes: Option<i64>) -> Option<String> {
        match offset_minutes {
            Some(m) => Some(format_round_trip(test_now() + TimeDelta::minutes(m))),
            None => raw.map(str::to_string),
        }
    }

    #[test_case(None, None, false; "null")]
    #[test_case(Some(""), None, false; "empty")]
    #[test_case(Some("   \t\n  "), None, false; "whitespace")]
    #[test_case(None, Some(-5), true; "past")]
    #[test_case(None, Some(60), false; "future")]
    #[test_case(None, Some(0), true; "exactly now")]
    fn test_are_expired_with_string_expiration(
        raw: Option<&str>,
        offset_minutes: Option<i64>,
        expected: bool,
    ) {
        let expiration = expiration_text(raw, offset_minutes);
        let cred = Credentials::from_parts("ak", "sk", Some("st"), expiration.as_deref())
            .expect("credentials must be valid");

        assert_eq!(expected, cred.are_expired_with(&FixedClock(test_now())));
    }

    #[test_case(None, false; "default")]
    #[test_case(Some(-5), true; "past")]
    #[test_case(Some(60), false; "future")]
    #[test_case(Some(0), true; "exactly now")]
    fn test_are_expired_with_structured_expiration(offset_minutes: Option<i64>, expected: bool) {
        let expiration = offset_minutes
            .map(|m| test_now() + TimeDelta::minutes(m))
            .unwrap_or_default();
        let cred = Credentials::new("ak", "sk")
            .with_session_token("st")
            .with_expiration_time(expiration);

        assert_eq!(expected, cred.are_expired_with(&FixedClock(test_now())));
    }

    #[test_case(-5, true; "past")]
    #[test_case(60, false; "future")]
    fn test_are_expired_against_wall_clock(offset_minutes: i64, expected: bool) {
        let expiration = format_round_trip(time::now() + TimeDelta::minutes(offset_minutes));
        let cred = Credentials::from_parts("ak", "sk", Some("st"), Some(&expiration)).unwrap();

        assert_eq!(expected, cred.are_expired());
    }

    #[test]
    fn test_construction_paths_agree() {
        let clock = FixedClock(test_now());
        for offset in [-120, -1, 0, 1, 120] {
            let t = test_now() + TimeDelta::seconds(offset);
            let from_text = Credentials::from_parts("ak", "sk", None, Some(&format_round_trip(t)))
                .expect("credentials must be valid");
            let from_time = Credentials::new("ak", "sk").with_expiration_time(t);

            assert_eq!(from_text, from_time);
            assert_eq!(
                from_text.are_expired_with(&clock),
                from_time.are_expired_with(&clock),
                "paths disagree at offset {offset}s"
            );
        }
    }

    #[test]
    fn test_default_time_means_no_expiration() {
        let cred = Credentials::new("ak", "sk").with_expiration_time(DateTime::default());
        assert_eq!(None, cred.expiration());
        assert!(!cred.are_expired());
        assert!(!cred.is_temporary());

        // The explicit path keeps the epoch as a real instant.
        let cred = Credentials::new("ak", "sk").with_expiration(Some(DateTime::default()));
        assert!(cred.are_expired());
    }

    #[test]
    fn test_epoch_differs_between_construction_paths() {
        let clock = FixedClock(test_now());
        let from_text =
            Credentials::from_parts("ak", "sk", None, Some("1970-01-01T00:00:00.0000000Z"))
                .unwrap();
        let from_time = Credentials::new("ak", "sk").with_expiration_time(DateTime::default());

        assert_eq!(Some(DateTime::default()), from_text.expiration());
        assert!(from_text.are_expired_with(&clock));
        assert_eq!(None, from_time.expiration());
        assert!(!from_time.are_expired_with(&clock));

        // One tick past the epoch both paths agree again.
        let t = DateTime::default() + TimeDelta::nanoseconds(100);
        let from_text =
            Credentials::from_parts("ak", "sk", None, Some(&format_round_trip(t))).unwrap();
        let from_time = Credentials::new("ak", "sk").with_expiration_time(t);
        assert_eq!(from_text, from_time);
        assert!(from_time.are_expired_with(&clock));
    }

    #[test_case("not a timestamp"; "words")]
    #[test_case("2024-02-30T00:00:00Z"; "no such day")]
    #[test_case("01/01/2024 00:00:00"; "locale layout")]
    fn test_invalid_expiration_fails_construction(input: &str) {
        let err = Credentials::from_parts("ak", "sk", None, Some(input))
            .expect_err("construction must fail");
        assert_eq!(ErrorKind::CredentialInvalid, err.kind());
    }

    #[test]
    fn test_expiration_is_utc() {
        let cred =
            Credentials::from_parts("ak", "sk", None, Some("2024-01-01T14:00:00.0000000+02:00"))
                .unwrap();
        assert_eq!(Some(test_now()), cred.expiration());
    }

    #[test]
    fn test_expires_in() {
        let cred = Credentials::new("ak", "sk")
            .with_expiration_time(test_now() + TimeDelta::minutes(15));
        assert_eq!(Some(TimeDelta::minutes(15)), cred.expires_in(test_now()));
        assert_eq!(
            Some(TimeDelta::minutes(-5)),
            cred.expires_in(test_now() + TimeDelta::minutes(20))
        );
        assert_eq!(None, Credentials::new("ak", "sk").expires_in(test_now()));
    }

    #[test]
    fn test_are_expired_is_idempotent() {
        let cred = Credentials::new("ak", "sk")
            .with_expiration_time(test_now() + TimeDelta::minutes(1));
        let clock = FixedClock(test_now());
        assert_eq!(cred.are_expired_with(&clock), cred.are_expired_with(&clock));
        assert_eq!(cred.are_expired(), cred.are_expired());
    }

    #[test]
    fn test_session_token() {
        let cred = Credentials::from_parts("ak", "sk", Some("  "), None).unwrap();
        assert_eq!(None, cred.session_token());
        assert!(!cred.is_temporary());

        let cred = Credentials::from_parts("ak", "sk", Some("st"), None).unwrap();
        assert_eq!(Some("st"), cred.session_token());
        assert!(cred.is_temporary());
    }

    #[test]
    fn test_is_valid() {
        let now = test_now();
        let cred = Credentials::new("ak", "sk");
        assert!(cred.is_valid_at(now));
        assert!(cred.is_valid());

        let cred = cred.with_expiration_time(now);
        assert!(!cred.is_valid_at(now));
        assert!(cred.is_valid_at(now - TimeDelta::seconds(1)));

        assert!(!Credentials::new("", "sk").is_valid_at(now));
        assert!(!Credentials::new("ak", "").is_valid_at(now));
        assert!(!None::<Credentials>.is_valid_at(now));
        assert!(Some(Credentials::new("ak", "sk")).is_valid_at(now));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let cred = Credentials::new("minioadmin", "wJalrXUtnFEMI/K7MDENG/bPxRfiCY")
            .with_session_token("AQoDYXdzEJr1K2dHBvLgz5SUMNqPDMhE");
        let output = format!("{cred:?}");

        assert!(output.contains("access_key: ***"));
        assert!(output.contains("secret_key: wJa***iCY"));
        assert!(output.contains("session_token: AQo***MhE"));
        assert!(!output.contains("wJalrXUtnFEMI"));
    }
}
