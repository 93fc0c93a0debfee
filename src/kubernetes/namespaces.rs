// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace existence checks

use crate::error::{KjError, Result};
use k8s_openapi::api::core::v1::Namespace;
use kube::{api::ListParams, Api, Client};
use tracing::{debug, instrument};

/// Check whether a namespace with exactly this name is visible to the client
#[instrument(skip(client))]
pub async fn namespace_exists(client: &Client, namespace: &str) -> Result<bool> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let namespace_list = namespaces.list(&ListParams::default()).await?;
    debug!("Cluster reports {} namespaces", namespace_list.items.len());

    Ok(contains_namespace(&namespace_list.items, namespace))
}

/// Fail with [`KjError::NamespaceNotFound`] unless the namespace exists
pub async fn ensure_namespace(client: &Client, namespace: &str) -> Result<()> {
    if namespace_exists(client, namespace).await? {
        debug!("Namespace {} exists", namespace);
        Ok(())
    } else {
        Err(KjError::NamespaceNotFound(namespace.to_string()))
    }
}

/// Exact, case-sensitive name match
pub fn contains_namespace(namespaces: &[Namespace], name: &str) -> bool {
    namespaces
        .iter()
        .any(|ns| ns.metadata.name.as_deref() == Some(name))
}
