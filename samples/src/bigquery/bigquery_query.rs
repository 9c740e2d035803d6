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

// [START bigquery_query]
use super::{format_row, run_query};
use google_cloud_bigquery_v2::client::JobService;
use google_cloud_bigquery_v2::model::QueryRequest;
use std::io::Write;

pub async fn sample<W: Write>(
    w: &mut W,
    client: &JobService,
    project_id: &str,
) -> anyhow::Result<()> {
    let request = QueryRequest::new()
        .set_query(
            "SELECT name FROM `bigquery-public-data.usa_names.usa_1910_2013` \
             WHERE state = \"TX\" \
             LIMIT 100",
        )
        .set_use_legacy_sql(false);

    let rows = run_query(client, project_id, request).await?;
    for row in &rows {
        writeln!(w, "{}", format_row(row))?;
    }

    Ok(())
}
// [END bigquery_query]
