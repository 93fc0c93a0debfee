// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The export pipeline: validate namespace, list jobs, keep completed ones, write CSV.

pub mod filter;
pub mod sink;

pub use filter::{completed_rows, is_complete, transform_job};
pub use sink::{write_rows, Sink};

use crate::error::Result;
use crate::kubernetes::{ensure_namespace, list_jobs};
use kube::Client;
use tracing::{info, instrument};

/// Export the successfully completed jobs of `namespace` to `sink`, returning the row count.
/// Nothing is listed or written when the namespace does not exist.
#[instrument(skip(client))]
pub async fn export_completed_jobs(client: &Client, namespace: &str, sink: &Sink) -> Result<usize> {
    ensure_namespace(client, namespace).await?;

    let jobs = list_jobs(client, namespace).await?;
    let rows = completed_rows(&jobs);
    info!(
        "{} of {} jobs in {} completed successfully",
        rows.len(),
        jobs.len(),
        namespace
    );

    sink.write(&rows)?;
    Ok(rows.len())
}
