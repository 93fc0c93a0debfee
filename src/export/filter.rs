// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Selection of successfully completed jobs and their conversion to rows

use crate::types::JobRow;
use k8s_openapi::api::batch::v1::Job;
use kube::ResourceExt;
use tracing::{debug, warn};

/// A job is complete when it has a completion time and every container of its
/// pod template succeeded
pub fn is_complete(job: &Job) -> bool {
    let Some(status) = job.status.as_ref() else {
        return false;
    };
    if status.completion_time.is_none() {
        return false;
    }

    let succeeded = usize::try_from(status.succeeded.unwrap_or(0)).ok();
    succeeded == Some(container_count(job))
}

/// Number of containers declared in the job's pod template
pub fn container_count(job: &Job) -> usize {
    job.spec
        .as_ref()
        .and_then(|spec| spec.template.spec.as_ref())
        .map_or(0, |pod| pod.containers.len())
}

/// Build the CSV row for a job that already passed [`is_complete`].
/// Returns `None` only when the job has no completion time.
pub fn transform_job(job: &Job) -> Option<JobRow> {
    let status = job.status.as_ref()?;
    let completed = status.completion_time.as_ref()?;

    let Some(started) = status.start_time.as_ref() else {
        warn!(
            "Job {} completed without a start time, leaving start and duration empty",
            job.name_any()
        );
        return Some(JobRow::without_start(job.name_any()));
    };

    Some(JobRow::new(job.name_any(), started.0, completed.0))
}

/// Rows for every complete job, in input order
pub fn completed_rows(jobs: &[Job]) -> Vec<JobRow> {
    jobs.iter()
        .filter(|job| {
            let complete = is_complete(job);
            if !complete {
                debug!("Skipping job {}: not completed successfully", job.name_any());
            }
            complete
        })
        .filter_map(transform_job)
        .collect()
}
