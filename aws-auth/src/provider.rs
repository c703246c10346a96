/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod env;

use aws_types::credential;
use aws_types::Credentials;
use std::sync::Arc;

/// A synchronous credentials provider
///
/// Every call performs a fresh lookup. Implementations must not cache.
pub trait ProvideCredentials: Send + Sync {
    fn provide_credentials(&self) -> credential::Result;
}

pub type SharedCredentialsProvider = Arc<dyn ProvideCredentials>;

pub fn default_provider() -> impl ProvideCredentials {
    env::EnvironmentVariableCredentialsProvider::new()
}

impl ProvideCredentials for Credentials {
    fn provide_credentials(&self) -> credential::Result {
        Ok(self.clone())
    }
}

impl ProvideCredentials for Arc<dyn ProvideCredentials> {
    fn provide_credentials(&self) -> credential::Result {
        self.as_ref().provide_credentials()
    }
}

#[cfg(test)]
mod test {
    use super::{ProvideCredentials, SharedCredentialsProvider};
    use crate::provider::env::EnvironmentVariableCredentialsProvider;
    use aws_types::os_shim_internal::Env;
    use aws_types::Credentials;
    use std::sync::Arc;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn providers_are_send_sync() {
        assert_send_sync::<EnvironmentVariableCredentialsProvider>();
        assert_send_sync::<SharedCredentialsProvider>();
    }

    #[test]
    fn static_credentials_provide_themselves() {
        let creds = Credentials::from_keys("akid", "secret", None);
        assert_eq!(creds.provide_credentials().unwrap(), creds);
    }

    #[test]
    fn shared_provider_delegates() {
        let shared: SharedCredentialsProvider = Arc::new(
            EnvironmentVariableCredentialsProvider::new_with_env(Env::from_slice(&[
                ("AWS_ACCESS_KEY_ID", "akid"),
                ("AWS_SECRET_ACCESS_KEY", "secret"),
            ])),
        );
        let creds = shared.provide_credentials().expect("valid credentials");
        assert_eq!(creds.access_key_id(), "akid");
        assert_eq!(creds.provider_name(), "Environment");
    }
}
