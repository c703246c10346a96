/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::provider::ProvideCredentials;
use aws_types::credential::{self, CredentialsError};
use aws_types::os_shim_internal::Env;
use aws_types::Credentials;

const ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
const SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
const SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";

const PROVIDER_NAME: &str = "Environment";

/// Load Credentials from Environment Variables
///
/// `AWS_ACCESS_KEY_ID` and `AWS_SECRET_ACCESS_KEY` are required. `AWS_SESSION_TOKEN` is only set
/// for temporary credentials. Empty values are treated as unset.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentVariableCredentialsProvider {
    env: Env,
}

impl EnvironmentVariableCredentialsProvider {
    pub fn new() -> Self {
        Self::new_with_env(Env::real())
    }

    /// Create a provider that reads from `env` instead of the process environment
    pub fn new_with_env(env: Env) -> Self {
        EnvironmentVariableCredentialsProvider { env }
    }

    fn required(&self, key: &'static str) -> Result<String, CredentialsError> {
        self.env.get_non_empty(key).ok_or_else(|| {
            tracing::debug!(var = key, "required environment variable not set");
            CredentialsError::CredentialsNotLoaded
        })
    }
}

impl ProvideCredentials for EnvironmentVariableCredentialsProvider {
    fn provide_credentials(&self) -> credential::Result {
        let access_key = self.required(ACCESS_KEY_ID)?;
        let secret_key = self.required(SECRET_ACCESS_KEY)?;
        let session_token = self.env.get_non_empty(SESSION_TOKEN);
        tracing::debug!(
            provider = PROVIDER_NAME,
            has_session_token = session_token.is_some(),
            "loaded credentials"
        );
        Ok(Credentials::new(
            access_key,
            secret_key,
            session_token,
            PROVIDER_NAME,
        ))
    }
}
