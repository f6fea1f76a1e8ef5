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

use log::debug;
use s3cred_core::utils::Redact;
use s3cred_core::{Context, Error, Result};

use crate::constants::*;
use crate::Credentials;

/// Config carries the static credential configuration.
#[derive(Clone, Default)]
pub struct Config {
    /// `access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`MINIO_ACCESS_KEY`]
    pub access_key: Option<String>,
    /// `secret_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`MINIO_SECRET_KEY`]
    pub secret_key: Option<String>,
    /// `session_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`MINIO_SESSION_TOKEN`]
    pub session_token: Option<String>,
    /// `expiration` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`MINIO_CREDENTIAL_EXPIRATION`]
    ///
    /// The value is a round-trip ISO-8601 timestamp like `2024-01-01T00:00:00.0000000Z`.
    pub expiration: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set access_key
    pub fn with_access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    /// Set secret_key
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Set session_token
    pub fn with_session_token(mut self, session_token: impl Into<String>) -> Self {
        self.session_token = Some(session_token.into());
        self
    }

    /// Set expiration
    pub fn with_expiration(mut self, expiration: impl Into<String>) -> Self {
        self.expiration = Some(expiration.into());
        self
    }

    /// Load config from env, fields that are already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(MINIO_ACCESS_KEY) {
            self.access_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(MINIO_SECRET_KEY) {
            self.secret_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(MINIO_SESSION_TOKEN) {
            self.session_token.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(MINIO_CREDENTIAL_EXPIRATION) {
            self.expiration.get_or_insert(v);
        }

        debug!("config loaded from env: {self:?}");
        self
    }

    /// Build credentials from this config.
    ///
    /// - If both keys are set, return `Ok(Some(cred))`
    /// - If neither key is set, return `Ok(None)`
    /// - If only one of them is set or the expiration is invalid, return `Err(err)`
    pub fn credentials(&self) -> Result<Option<Credentials>> {
        match (&self.access_key, &self.secret_key) {
            (Some(ak), Some(sk)) => Credentials::from_parts(
                ak,
                sk,
                self.session_token.as_deref(),
                self.expiration.as_deref(),
            )
            .map(Some),
            (None, None) => Ok(None),
            (Some(_), None) => Err(Error::config_invalid(
                "access_key is set but secret_key is missing",
            )),
            (None, Some(_)) => Err(Error::config_invalid(
                "secret_key is set but access_key is missing",
            )),
        }
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key", &self.access_key.as_ref().map(Redact::from))
            .field("secret_key", &self.secret_key.as_ref().map(Redact::from))
            .field(
                "session_token",
                &self.session_token.as_ref().map(Redact::from),
            )
            .field("expiration", &self.expiration)
            .finish()
    }
}
