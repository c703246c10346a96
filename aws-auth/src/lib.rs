/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Credentials and home directory lookup for AWS request signing.
//!
//! ```rust,no_run
//! let credentials = aws_auth::lookup_credentials().expect("credentials in the environment");
//! println!("using access key {}", credentials.access_key_id());
//!
//! let home = aws_auth::home_dir_resolver();
//! println!("home directory: {:?}", home());
//! ```

pub mod provider;

use aws_types::credential;
use aws_types::home::{self, HomeDirFn};
use provider::env::EnvironmentVariableCredentialsProvider;
use provider::ProvideCredentials;

/// Load credentials from `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and `AWS_SESSION_TOKEN`
pub fn lookup_credentials() -> credential::Result {
    EnvironmentVariableCredentialsProvider::new().provide_credentials()
}

/// Returns the platform home directory lookup without running it
pub fn home_dir_resolver() -> HomeDirFn {
    home::real_home_dir
}

#[cfg(test)]
mod test {
    use super::home_dir_resolver;

    #[test]
    fn resolver_matches_real_lookup() {
        let resolver = home_dir_resolver();
        assert_eq!(resolver(), aws_types::home::real_home_dir());
    }
}
