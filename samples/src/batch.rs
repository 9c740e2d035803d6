// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Samples for the [Batch] API.
//!
//! Batch runs jobs made of task groups. Each task group runs the same task
//! specification a number of times, possibly in parallel.
//!
//! [Batch]: https://cloud.google.com/batch/docs

pub mod batch_create_container_job;
pub mod batch_create_script_job;
pub mod batch_delete_job;
pub mod batch_get_job;
pub mod batch_get_task;
pub mod batch_list_jobs;
pub mod batch_list_tasks;

use google_cloud_batch_v1::client::BatchService;
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_lro::Poller;

/// The name of the task group used when a job does not name its task groups.
pub const DEFAULT_TASK_GROUP: &str = "group0";

pub fn parent(project_id: &str, region: &str) -> String {
    format!("projects/{project_id}/locations/{region}")
}

pub fn job_name(project_id: &str, region: &str, job_id: &str) -> String {
    format!("{}/jobs/{job_id}", parent(project_id, region))
}

pub fn task_group_name(project_id: &str, region: &str, job_id: &str, group: &str) -> String {
    format!("{}/taskGroups/{group}", job_name(project_id, region, job_id))
}

pub fn task_name(project_id: &str, region: &str, job_id: &str, group: &str, index: u32) -> String {
    format!(
        "{}/tasks/{index}",
        task_group_name(project_id, region, job_id, group)
    )
}

/// Deletes jobs created by the samples that are more than 48 hours old.
///
/// Jobs created by the samples carry an `env=testing` label.
pub async fn cleanup_stale_jobs(
    client: &BatchService,
    project_id: &str,
    region: &str,
) -> anyhow::Result<()> {
    use google_cloud_wkt::Timestamp;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};
    let stale_deadline = SystemTime::now().duration_since(UNIX_EPOCH)?;
    let stale_deadline = stale_deadline - Duration::from_secs(48 * 60 * 60);
    let stale_deadline = Timestamp::new(stale_deadline.as_secs() as i64, 0)?;

    let mut jobs = client
        .list_jobs()
        .set_parent(parent(project_id, region))
        .by_item();
    while let Some(job) = jobs.next().await.transpose()? {
        if job.labels.get("env").is_none_or(|v| v != "testing") {
            continue;
        }
        if job.create_time.as_ref().is_none_or(|t| *t > stale_deadline) {
            continue;
        }
        tracing::info!("deleting stale job {}", job.name);
        if let Err(e) = client
            .delete_job()
            .set_name(&job.name)
            .poller()
            .until_done()
            .await
        {
            tracing::warn!("error deleting stale job {}: {e:?}", job.name);
        }
    }

    Ok(())
}
