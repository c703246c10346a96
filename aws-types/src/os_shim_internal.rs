/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Process environment access that tests can replace with a fixed set of variables

use std::collections::HashMap;
use std::env::VarError;
use std::fmt;
use std::sync::Arc;

/// Source of environment variables for credential and home directory lookups
///
/// The default reads the process environment. A fake environment holds its variables behind an
/// `Arc`, so clones share them.
#[derive(Clone, Default)]
pub struct Env {
    // `None` reads the process environment
    vars: Option<Arc<HashMap<String, String>>>,
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // values may hold secrets, only the kind of environment is printed
        match &self.vars {
            None => f.write_str("Env::Real"),
            Some(vars) => f
                .debug_struct("Env::Fake")
                .field("vars", &vars.len())
                .finish(),
        }
    }
}

impl Env {
    /// Read the process environment through [`std::env::var`](std::env::var)
    pub fn real() -> Self {
        Env { vars: None }
    }

    /// Create a fake environment holding exactly `vars`
    ///
    /// ```rust
    /// use aws_types::os_shim_internal::Env;
    /// let env = Env::from_slice(&[
    ///     ("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE"),
    ///     ("AWS_SESSION_TOKEN", ""),
    /// ]);
    /// assert_eq!(env.get_non_empty("AWS_ACCESS_KEY_ID").as_deref(), Some("AKIDEXAMPLE"));
    /// assert_eq!(env.get_non_empty("AWS_SESSION_TOKEN"), None);
    /// ```
    pub fn from_slice<'a>(vars: &[(&'a str, &'a str)]) -> Self {
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>()
            .into()
    }

    pub fn get(&self, key: &str) -> Result<String, VarError> {
        match &self.vars {
            None => std::env::var(key),
            Some(vars) => vars.get(key).cloned().ok_or(VarError::NotPresent),
        }
    }

    /// The value of `key`, or `None` when it is unset, not valid unicode, or empty
    pub fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).ok().filter(|value| !value.is_empty())
    }
}

impl From<HashMap<String, String>> for Env {
    fn from(vars: HashMap<String, String>) -> Self {
        Env {
            vars: Some(Arc::new(vars)),
        }
    }
}
