// Copyright (c) 2025-present Cesar Saguier Antebi
// All Rights Reserved.
//
// This file is part of the AIGEN Blockchain project.
// Licensed under the Business Source License 1.1 (BUSL-1.1).
// See LICENSE file in the project root for full license information.
//
// Commercial use requires express written consent and royalty agreements.
// Contact: Cesar Saguier Antebi

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

pub const USAGE: &str =
    "Usage: -home [chain data dir] -id [new chainId] -k [keysfile(keep one key per line)]";

/// Single-dash long flags accepted for compatibility with existing scripts.
const LEGACY_LONG_FLAGS: &[&str] = &["home", "id", "keys"];

#[derive(Parser, Debug, Default)]
#[command(name = "rechain")]
#[command(version, about = "Re-sign the last commit and rewrite consensus state under a new chain id", long_about = None)]
pub struct Cli {
    /// Node home directory
    #[arg(long)]
    pub home: Option<PathBuf>,
    /// New chain id, e.g. cosmos_9000-2
    #[arg(long)]
    pub id: Option<String>,
    /// Keys file, one base64 key per line
    #[arg(short = 'k', long = "keys", visible_alias = "k")]
    pub keys: Option<PathBuf>,
}

/// A command line with every required value present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub home: PathBuf,
    pub chain_id: String,
    pub keys_file: PathBuf,
}

impl Cli {
    pub fn try_parse_normalized<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }

    /// `None` when any flag is missing or empty.
    pub fn into_invocation(self) -> Option<Invocation> {
        let home = self.home.filter(|p| !p.as_os_str().is_empty())?;
        let chain_id = self.id.filter(|s| !s.is_empty())?;
        let keys_file = self.keys.filter(|p| !p.as_os_str().is_empty())?;
        Some(Invocation {
            home,
            chain_id,
            keys_file,
        })
    }
}

/// Rewrites `-home`, `-id` and `-keys` (with or without `=value`) to their
/// double-dash form. Arguments after `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    for (idx, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if idx == 0 || passthrough {
            out.push(arg);
            continue;
        }
        let rewritten = arg.to_str().and_then(|s| {
            if s == "--" {
                return None;
            }
            let name = s.strip_prefix('-').filter(|rest| !rest.starts_with('-'))?;
            let flag = name.split_once('=').map_or(name, |(flag, _)| flag);
            LEGACY_LONG_FLAGS
                .contains(&flag)
                .then(|| OsString::from(format!("-{s}")))
        });
        if arg.to_str() == Some("--") {
            passthrough = true;
        }
        out.push(rewritten.unwrap_or(arg));
    }
    out
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::normalize_args;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn short_key_flag_is_untouched() {
        let args = ["rechain", "-k", "keys.txt", "-k=other"];
        assert_eq!(normalize_args(args), os(&args));
    }

    #[test]
    fn values_after_separator_are_untouched() {
        let args = ["rechain", "--", "-home"];
        assert_eq!(normalize_args(args), os(&args));
    }
}
