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

// [START batch_list_tasks]
use google_cloud_batch_v1::client::BatchService;
use google_cloud_gax::paginator::ItemPaginator;
use std::io::Write;

pub async fn sample<W: Write>(
    w: &mut W,
    client: &BatchService,
    project_id: &str,
    region: &str,
    job_id: &str,
    group: &str,
) -> anyhow::Result<()> {
    let mut tasks = client
        .list_tasks()
        .set_parent(format!(
            "projects/{project_id}/locations/{region}/jobs/{job_id}/taskGroups/{group}"
        ))
        .by_item();
    while let Some(task) = tasks.next().await.transpose()? {
        writeln!(w, "{task:?}")?;
    }

    Ok(())
}
// [END batch_list_tasks]
