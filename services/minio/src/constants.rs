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

/// Env value for the access key.
pub const MINIO_ACCESS_KEY: &str = "MINIO_ACCESS_KEY";
/// Env value for the secret key.
pub const MINIO_SECRET_KEY: &str = "MINIO_SECRET_KEY";
/// Env value for the session token of temporary credentials.
pub const MINIO_SESSION_TOKEN: &str = "MINIO_SESSION_TOKEN";
/// Env value for the expiration of temporary credentials.
pub const MINIO_CREDENTIAL_EXPIRATION: &str = "MINIO_CREDENTIAL_EXPIRATION";
