/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Types shared by AWS credential providers.
//!
//! - [`Credentials`]: access key, secret key and optional session token
//! - [`os_shim_internal::Env`]: a mockable view of the process environment
//! - [`home`]: resolution of the current user's home directory

pub mod credential;
pub mod home;
pub mod os_shim_internal;

pub use credential::Credentials;
