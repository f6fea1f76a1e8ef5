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

use std::fmt::Debug;

use crate::time::{now, DateTime};

/// SigningCredential is the trait request signers use to decide whether a
/// credential can still sign requests.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is valid at the given instant.
    fn is_valid_at(&self, now: DateTime) -> bool;

    /// Check if the credential is valid right now.
    fn is_valid(&self) -> bool {
        self.is_valid_at(now())
    }
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid_at(&self, now: DateTime) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid_at(now)
    }
}
