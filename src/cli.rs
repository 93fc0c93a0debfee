// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command-line flags

use crate::constants::{DEFAULT_NAMESPACE, STDOUT_SINK};
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "kj", version, about = "Get jobs from a namespace")]
pub struct Cli {
    /// Path to kubeconfig file (defaults to ~/.kube/config)
    #[arg(short, long, default_value = "")]
    pub kubeconfig: String,

    /// Namespace to get jobs from
    #[arg(short, long, default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Save to file, or "stdout"
    #[arg(short, long, default_value = STDOUT_SINK)]
    pub output: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
