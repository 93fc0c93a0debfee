// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Job listing

use crate::error::Result;
use k8s_openapi::api::batch::v1::Job;
use kube::{api::ListParams, Api, Client};
use tracing::{info, instrument};

/// List every Job in the namespace with a single request, in API order
#[instrument(skip(client))]
pub async fn list_jobs(client: &Client, namespace: &str) -> Result<Vec<Job>> {
    let jobs: Api<Job> = Api::namespaced(client.clone(), namespace);
    let job_list = jobs.list(&ListParams::default()).await?;

    info!("Found {} jobs in namespace {}", job_list.items.len(), namespace);
    Ok(job_list.items)
}
