// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::cli::Cli;
use crate::constants::kubeconfig;
use crate::error::{KjError, Result};
use crate::export::Sink;
use std::path::PathBuf;

/// Source of the user's home directory
pub trait HomeDir {
    fn home_dir(&self) -> Option<PathBuf>;
}

/// Looks up the home directory of the current user
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHome;

impl HomeDir for SystemHome {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

/// Resolved settings for one export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Kubeconfig file used to reach the cluster
    pub kubeconfig: PathBuf,
    /// Namespace whose jobs are exported
    pub namespace: String,
    pub output: Sink,
}

impl Config {
    /// Resolve configuration from command-line flags
    pub fn resolve(cli: &Cli, home: &impl HomeDir) -> Result<Self> {
        let kubeconfig = if cli.kubeconfig.is_empty() {
            default_kubeconfig(home)?
        } else {
            PathBuf::from(&cli.kubeconfig)
        };

        Ok(Config {
            kubeconfig,
            namespace: cli.namespace.clone(),
            output: Sink::from_token(&cli.output),
        })
    }
}

/// `~/.kube/config` for the given home directory
fn default_kubeconfig(home: &impl HomeDir) -> Result<PathBuf> {
    let home = home.home_dir().ok_or_else(|| {
        KjError::Config(
            "cannot determine home directory, pass --kubeconfig explicitly".to_string(),
        )
    })?;

    Ok(home.join(kubeconfig::DIR).join(kubeconfig::FILE))
}
