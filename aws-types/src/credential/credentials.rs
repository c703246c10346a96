/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::fmt::{self, Debug, Formatter};
use zeroize::Zeroizing;

/// AWS SDK Credentials
///
/// An opaque struct representing credentials that may be used to sign requests to AWS.
///
/// The secret access key and the session token are zeroed in memory when dropped, and they are
/// never included in the `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_key_id: String,
    secret_access_key: Zeroizing<String>,

    /// Only set for temporary credentials, e.g. ones issued by STS
    session_token: Option<Zeroizing<String>>,

    /// Static name of the source that loaded these credentials
    provider_name: &'static str,
}

const STATIC_CREDENTIALS: &str = "Static";
const REDACTED: &str = "** redacted **";

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut creds = f.debug_struct("Credentials");
        creds
            .field("provider_name", &self.provider_name)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &REDACTED);
        if self.session_token.is_some() {
            creds.field("session_token", &REDACTED);
        }
        creds.finish()
    }
}

impl Credentials {
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
        provider_name: &'static str,
    ) -> Self {
        Credentials {
            access_key_id: access_key_id.into(),
            secret_access_key: Zeroizing::new(secret_access_key.into()),
            session_token: session_token.map(Zeroizing::new),
            provider_name,
        }
    }

    /// Create credentials from hardcoded keys
    ///
    /// ```rust
    /// use aws_types::Credentials;
    /// let creds = Credentials::from_keys("akid", "secret_key", None);
    /// assert_eq!(creds.provider_name(), "Static");
    /// ```
    pub fn from_keys(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        Self::new(
            access_key_id,
            secret_access_key,
            session_token,
            STATIC_CREDENTIALS,
        )
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref().map(String::as_str)
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider_name
    }
}

#[cfg(test)]
mod test {
    use crate::Credentials;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn creds_are_send_sync() {
        assert_send_sync::<Credentials>()
    }

    #[test]
    fn accessors() {
        let creds = Credentials::new("AKIA123", "secret456", Some("token".into()), "Test");
        assert_eq!(creds.access_key_id(), "AKIA123");
        assert_eq!(creds.secret_access_key(), "secret456");
        assert_eq!(creds.session_token(), Some("token"));
        assert_eq!(creds.provider_name(), "Test");

        let creds = Credentials::from_keys("AKIA123", "secret456", None);
        assert_eq!(creds.session_token(), None);
        assert_eq!(creds.provider_name(), "Static");
    }

    #[test]
    fn debug_impl_redacts_secrets() {
        let creds = Credentials::new(
            "AKIDEXAMPLE",
            "wJalrXUtnFEMI",
            Some("FwoGZXIvYXdzEBY".into()),
            "Test",
        );
        let debug = format!("{:?}", creds);
        assert!(debug.contains("AKIDEXAMPLE"), "{}", debug);
        assert!(!debug.contains("wJalrXUtnFEMI"), "{}", debug);
        assert!(!debug.contains("FwoGZXIvYXdzEBY"), "{}", debug);
        assert!(debug.contains("** redacted **"), "{}", debug);
    }

    #[test]
    fn equality_covers_every_field() {
        let a = Credentials::from_keys("a", "b", None);
        assert_eq!(a, a.clone());
        assert_ne!(a, Credentials::from_keys("a", "b", Some("c".into())));
        assert_ne!(a, Credentials::new("a", "b", None, "Other"));
    }
}
