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
use std::sync::Arc;

use crate::env::{Env, NoopEnv};
use crate::time::{Clock, DateTime, SystemClock};

/// Context carries the runtime capabilities that credential handling needs.
///
/// ## Important
///
/// No environment is read unless one is configured. An unconfigured
/// context uses a no-op env and the system clock.
///
/// ## Example
///
/// ```
/// use s3cred_core::{Context, OsEnv};
/// use s3cred_core::time::{FixedClock, parse_rfc3339};
///
/// let ctx = Context::new()
///     .with_env(OsEnv)
///     .with_clock(FixedClock(parse_rfc3339("2024-01-01T00:00:00Z").unwrap()));
/// ```
#[derive(Clone)]
pub struct Context {
    env: Arc<dyn Env>,
    clock: Arc<dyn Clock>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("env", &self.env)
            .field("clock", &self.clock)
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new Context with a no-op env and the system clock.
    pub fn new() -> Self {
        Self {
            env: Arc::new(NoopEnv),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the environment implementation.
    pub fn with_env(mut self, env: impl Env) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Replace the clock implementation.
    pub fn with_clock(mut self, clock: impl Clock) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Get the environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    #[inline]
    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }

    /// The clock of this context.
    #[inline]
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Sample the current instant from the configured clock.
    #[inline]
    pub fn now(&self) -> DateTime {
        self.clock.now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{parse_rfc3339, FixedClock};
    use crate::StaticEnv;
    use std::collections::HashMap;

    #[test]
    fn test_default_context() {
        let ctx = Context::default();
        assert_eq!(None, ctx.env_var("HOME"));
    }

    #[test]
    fn test_context_with_env_and_clock() {
        let t = parse_rfc3339("2024-01-01T00:00:00Z").unwrap();
        let ctx = Context::new()
            .with_env(StaticEnv {
                envs: HashMap::from([("KEY".to_string(), "value".to_string())]),
            })
            .with_clock(FixedClock(t));

        assert_eq!(Some("value".to_string()), ctx.env_var("KEY"));
        assert_eq!(t, ctx.now());
        assert_eq!(t, ctx.clock().now());
    }
}
