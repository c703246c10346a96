/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS SDK Credentials
//!
//! [`Credentials`] are built fresh by each lookup and are never mutated afterwards. A provider
//! reports failure with [`CredentialsError`]:
//! ```rust
//! use aws_types::credential::{self, Credentials, CredentialsError};
//!
//! fn from_lines(raw: &str) -> credential::Result {
//!     let mut lines = raw.lines().filter(|l| !l.is_empty());
//!     let akid = lines.next().ok_or(CredentialsError::CredentialsNotLoaded)?;
//!     let secret = lines.next().ok_or(CredentialsError::CredentialsNotLoaded)?;
//!     Ok(Credentials::new(akid, secret, None, "Lines"))
//! }
//!
//! assert!(from_lines("AKIDEXAMPLE\nsecret").is_ok());
//! assert!(from_lines("AKIDEXAMPLE").is_err());
//! ```

pub mod credentials;
pub mod error;

pub use credentials::Credentials;
pub use error::CredentialsError;

/// Result of a credentials lookup
pub type Result = std::result::Result<Credentials, CredentialsError>;
