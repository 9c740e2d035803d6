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

// [START batch_create_script_job]
use google_cloud_batch_v1::client::BatchService;
use google_cloud_batch_v1::model::{
    AllocationPolicy, ComputeResource, Job, LogsPolicy, Runnable, TaskGroup, TaskSpec,
    allocation_policy::{InstancePolicy, InstancePolicyOrTemplate},
    logs_policy::Destination,
    runnable::Script,
};
use google_cloud_wkt::Duration;
use std::io::Write;

pub async fn sample<W: Write>(
    w: &mut W,
    client: &BatchService,
    project_id: &str,
    region: &str,
    job_id: &str,
) -> anyhow::Result<()> {
    // Batch sets BATCH_TASK_INDEX and BATCH_TASK_COUNT for each task.
    let script = Script::new().set_text(
        "echo Hello world! This is task ${BATCH_TASK_INDEX}. This job has a total of ${BATCH_TASK_COUNT} tasks.",
    );
    let task_spec = TaskSpec::new()
        .set_runnables([Runnable::new().set_script(script)])
        .set_compute_resource(
            ComputeResource::new()
                .set_cpu_milli(2000)
                .set_memory_mib(16),
        )
        .set_max_retry_count(1)
        .set_max_run_duration(Duration::clamp(3600, 0));
    let task_group = TaskGroup::new().set_task_count(4).set_task_spec(task_spec);

    let allocation_policy = AllocationPolicy::new().set_instances([
        InstancePolicyOrTemplate::new()
            .set_policy(InstancePolicy::new().set_machine_type("e2-standard-4")),
    ]);

    let job = Job::new()
        .set_task_groups([task_group])
        .set_allocation_policy(allocation_policy)
        .set_labels([("env", "testing"), ("type", "script")])
        .set_logs_policy(LogsPolicy::new().set_destination(Destination::CloudLogging));

    let job = client
        .create_job()
        .set_parent(format!("projects/{project_id}/locations/{region}"))
        .set_job_id(job_id)
        .set_job(job)
        .send()
        .await?;
    writeln!(w, "Job created: {job:?}")?;

    Ok(())
}
// [END batch_create_script_job]
