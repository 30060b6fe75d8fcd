// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod cli;
mod commands;

use clap::Parser;
use cli::{Args, Command};
use color_eyre::Result;
use color_eyre::eyre::Context;
use commands::{ValidationReport, find_conversations, list_tasks, validate};
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;
use workroom_gateway::{GatewayConfig, LatencyConfig, MockGateway};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // RUST_LOG wins over -v/-q
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.log_level().into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let config: GatewayConfig = load_config(args.config.as_deref(), args.instant)?;

    match args.command {
        Command::Validate {
            form,
            file,
            step,
            vacation_days_left,
        } => {
            let json: String = std::fs::read_to_string(&file)
                .wrap_err_with(|| format!("Failed to read {}", file.display()))?;
            let report: ValidationReport = validate(form, &json, step, vacation_days_left)?;
            print_json(&report.errors)?;
            if report.valid {
                info!(form = report.form, "Draft is valid");
                Ok(ExitCode::SUCCESS)
            } else {
                info!(form = report.form, "Draft has errors");
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Tasks(task_args) => {
            let gateway: MockGateway = MockGateway::new(config);
            print_json(&list_tasks(&gateway, &task_args).await?)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Conversations { query } => {
            let gateway: MockGateway = MockGateway::new(config);
            print_json(&find_conversations(&gateway, &query).await?)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(path: Option<&Path>, instant: bool) -> Result<GatewayConfig> {
    let mut config: GatewayConfig = match path {
        Some(path) => {
            let json: String = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("Failed to read config {}", path.display()))?;
            GatewayConfig::from_json(&json)
                .wrap_err_with(|| format!("Invalid config {}", path.display()))?
        }
        None => GatewayConfig::default(),
    };
    if instant {
        config.latency_ms = LatencyConfig::zero();
    }
    Ok(config)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered: String =
        serde_json::to_string_pretty(value).wrap_err("Failed to render output")?;
    println!("{rendered}");
    Ok(())
}
