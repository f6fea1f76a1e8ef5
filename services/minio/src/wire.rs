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

//! Decoding of credential payloads.
//!
//! Credentials travel as a `Credentials` element:
//!
//! ```xml
//! <Credentials>
//!   <AccessKeyId>Q3AM3UQ867SPQQA43P2F</AccessKeyId>
//!   <SecretAccessKey>zuf+tfteSlswRu7BJ86wekitnifILbZam1KYY3TG</SecretAccessKey>
//!   <SessionToken>eyJhbGciOiJIUzUxMiIsInR5cCI6IkpXVCJ9</SessionToken>
//!   <Expiration>2024-01-01T00:00:00.0000000Z</Expiration>
//! </Credentials>
//! ```
//!
//! JSON documents use the same field names.

use log::debug;
use quick_xml::de;
use serde::Deserialize;

use s3cred_core::{Error, Result};

use crate::Credentials;

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct RawCredentials {
    access_key_id: String,
    secret_access_key: String,
    session_token: Option<String>,
    expiration: Option<String>,
}

impl RawCredentials {
    fn into_credentials(self) -> Result<Credentials> {
        if self.access_key_id.is_empty() {
            return Err(Error::credential_invalid("credentials missing AccessKeyId"));
        }
        if self.secret_access_key.is_empty() {
            return Err(Error::credential_invalid(
                "credentials missing SecretAccessKey",
            ));
        }

        Credentials::from_parts(
            &self.access_key_id,
            &self.secret_access_key,
            self.session_token.as_deref(),
            self.expiration.as_deref(),
        )
    }
}

impl<'de> Deserialize<'de> for Credentials {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawCredentials::deserialize(deserializer)?;
        raw.into_credentials().map_err(serde::de::Error::custom)
    }
}

impl Credentials {
    /// Decode credentials from a `Credentials` XML element.
    ///
    /// Malformed XML yields an `Unexpected` error, missing keys or an
    /// unparsable expiration yield `CredentialInvalid`.
    pub fn from_xml(content: &str) -> Result<Self> {
        let raw: RawCredentials = de::from_str(content)
            .map_err(|e| Error::unexpected("failed to decode credentials xml").with_source(e))?;

        let cred = raw.into_credentials()?;
        debug!("decoded credentials from xml: {cred:?}");
        Ok(cred)
    }
}
