/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use thiserror::Error;

/// An error retrieving credentials from a credentials provider
///
/// There is currently a single failure kind. The environment being unreadable and the required
/// variables being unset are reported the same way.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CredentialsError {
    /// The access key id or the secret access key was not available
    ///
    /// Callers can recover from this by falling back to another credentials source.
    #[error("key/secret were not available in the process environment")]
    CredentialsNotLoaded,
}

#[cfg(test)]
mod test {
    use super::CredentialsError;

    #[test]
    fn display_names_key_and_secret() {
        assert_eq!(
            CredentialsError::CredentialsNotLoaded.to_string(),
            "key/secret were not available in the process environment"
        );
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&CredentialsError::CredentialsNotLoaded);
    }
}
