/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Home directory resolution

use crate::os_shim_internal::Env;
use std::path::PathBuf;

/// Deferred home directory lookup
///
/// The directory is resolved each time the function is called, not when it is handed out.
pub type HomeDirFn = fn() -> Option<PathBuf>;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Os {
    Windows,
    NotWindows,
}

impl Os {
    pub fn real() -> Self {
        match std::env::consts::OS {
            "windows" => Os::Windows,
            _ => Os::NotWindows,
        }
    }
}

/// Resolve the home directory of the current user the way the platform does
///
/// Delegates to the `home` crate, which falls back to the user database (`getpwuid_r` on unix,
/// the profile folder on Windows) when the environment does not name a home directory.
pub fn real_home_dir() -> Option<PathBuf> {
    match ::home::home_dir().filter(|dir| !dir.as_os_str().is_empty()) {
        Some(dir) => {
            tracing::debug!(home = ?dir, "resolved platform home directory");
            Some(dir)
        }
        None => {
            tracing::debug!("platform could not determine home directory");
            None
        }
    }
}

/// Resolve a home directory from environment variables alone
///
/// `HOME` wins on every platform. On Windows, `USERPROFILE` and then `HOMEDRIVE` + `HOMEPATH`
/// are consulted. Empty values are skipped. Unlike [`real_home_dir`], the user database is never
/// read.
pub fn home_dir(env_var: &Env, os: Os) -> Option<PathBuf> {
    if let Some(home) = env_var.get_non_empty("HOME") {
        tracing::debug!(src = "HOME", "loaded home directory");
        return Some(PathBuf::from(home));
    }

    if os == Os::Windows {
        if let Some(home) = env_var.get_non_empty("USERPROFILE") {
            tracing::debug!(src = "USERPROFILE", "loaded home directory");
            return Some(PathBuf::from(home));
        }

        let home_drive = env_var.get_non_empty("HOMEDRIVE");
        let home_path = env_var.get_non_empty("HOMEPATH");
        if let (Some(mut drive), Some(path)) = (home_drive, home_path) {
            tracing::debug!(src = "HOMEDRIVE/HOMEPATH", "loaded home directory");
            drive.push_str(&path);
            return Some(drive.into());
        }
    }
    tracing::debug!(os = ?os, "could not determine home directory");
    None
}
