// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use kj::cli::Cli;
use kj::config::{Config, SystemHome};
use kj::export::export_completed_jobs;
use kj::kubernetes::create_client;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so CSV on stdout stays clean
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let config = Config::resolve(cli, &SystemHome)?;
    debug!(
        "Configuration resolved: kubeconfig={}, namespace={}, output={}",
        config.kubeconfig.display(),
        config.namespace,
        config.output
    );

    let client = create_client(&config.kubeconfig).await?;
    info!("Connected to Kubernetes cluster");

    let exported = export_completed_jobs(&client, &config.namespace, &config.output).await?;
    info!("Exported {} jobs to {}", exported, config.output);

    Ok(())
}
