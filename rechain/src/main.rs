// Copyright (c) 2025-present Cesar Saguier Antebi
// All Rights Reserved.
//
// This file is part of the AIGEN Blockchain project.
// Licensed under the Business Source License 1.1 (BUSL-1.1).
// See LICENSE file in the project root for full license information.
//
// Commercial use requires express written consent and royalty agreements.
// Contact: Cesar Saguier Antebi

use std::process::ExitCode;

use anyhow::{Context, Result};
use rechain::{Cli, HomeConfig, Invocation, MigrateError, Outcome, USAGE};

const EXIT_FAILURE: u8 = 1;
const EXIT_SIGNER_NOT_FOUND: u8 = 3;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse_normalized(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };
    let Some(invocation) = cli.into_invocation() else {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    };

    match execute(&invocation) {
        Ok(outcome) => {
            println!("Success!");
            println!(
                "Changed chainId from {} to {}",
                outcome.old_chain_id, outcome.new_chain_id
            );
            ExitCode::SUCCESS
        }
        Err(err) => match err.downcast_ref::<MigrateError>() {
            Some(e) if e.is_fatal() => {
                eprintln!("{e}");
                ExitCode::from(EXIT_SIGNER_NOT_FOUND)
            }
            Some(e) => {
                println!("{e}");
                ExitCode::from(EXIT_FAILURE)
            }
            None => {
                println!("{err:#}");
                ExitCode::from(EXIT_FAILURE)
            }
        },
    }
}

fn execute(invocation: &Invocation) -> Result<Outcome> {
    let config = HomeConfig::load(&invocation.home).with_context(|| {
        format!("failed to load configuration for home {}", invocation.home.display())
    })?;
    Ok(rechain::run(&config, &invocation.chain_id, &invocation.keys_file)?)
}
