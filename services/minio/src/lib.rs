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

//! Credentials for MinIO and other S3 compatible object storage services.
//!
//! ## Example
//!
//! ```
//! use s3cred_core::time::{parse_rfc3339, FixedClock};
//! use s3cred_core::Result;
//! use s3cred_minio::Credentials;
//!
//! fn main() -> Result<()> {
//!     let cred = Credentials::from_parts(
//!         "Q3AM3UQ867SPQQA43P2F",
//!         "zuf+tfteSlswRu7BJ86wekitnifILbZam1KYY3TG",
//!         Some("eyJhbGciOiJIUzUxMiIsInR5cCI6IkpXVCJ9"),
//!         Some("2024-01-01T00:00:00.0000000Z"),
//!     )?;
//!
//!     let before = FixedClock(parse_rfc3339("2023-12-31T23:00:00Z")?);
//!     let after = FixedClock(parse_rfc3339("2024-01-01T00:00:00Z")?);
//!     assert!(!cred.are_expired_with(&before));
//!     assert!(cred.are_expired_with(&after));
//!     Ok(())
//! }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;
pub use constants::*;

mod config;
pub use config::Config;
mod credential;
pub use credential::Credentials;
mod wire;
