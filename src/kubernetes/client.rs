// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation from a kubeconfig file

use crate::error::{KjError, Result};
use kube::{
    config::{KubeConfigOptions, Kubeconfig},
    Client, Config as KConfig,
};
use std::path::Path;
use tracing::{debug, instrument};

/// Create a Kubernetes client from the kubeconfig file at `path`, using its current context
#[instrument]
pub async fn create_client(path: &Path) -> Result<Client> {
    let kubeconfig = tokio::fs::read_to_string(path).await.map_err(|e| {
        KjError::Kubeconfig(format!("Failed to read {}: {}", path.display(), e))
    })?;
    debug!("Read kubeconfig from {}", path.display());

    create_client_from_kubeconfig(&kubeconfig)
        .await
        .map_err(|e| match e {
            KjError::Kubeconfig(msg) => {
                KjError::Kubeconfig(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })
}

/// Create a Kubernetes client from a kubeconfig string
async fn create_client_from_kubeconfig(kubeconfig: &str) -> Result<Client> {
    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig)
        .map_err(|e| KjError::Kubeconfig(format!("Failed to parse kubeconfig: {}", e)))?;

    let client_config =
        KConfig::from_custom_kubeconfig(kubeconfig_parsed, &KubeConfigOptions::default())
            .await
            .map_err(|e| KjError::Kubeconfig(format!("Failed to create config: {}", e)))?;
    debug!("Using cluster {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| KjError::Kubeconfig(format!("Failed to create client: {}", e)))
}
