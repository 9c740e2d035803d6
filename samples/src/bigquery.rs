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

//! Samples for [BigQuery].
//!
//! The samples use the `jobs.query` RPC to start a query. Large or slow
//! queries do not complete within the initial RPC, and their results span
//! multiple pages. [run_query] takes care of waiting for the job and reading
//! all the pages.
//!
//! [BigQuery]: https://cloud.google.com/bigquery/docs

use anyhow::bail;
use google_cloud_bigquery_v2::client::JobService;
use google_cloud_bigquery_v2::model::{ErrorProto, QueryRequest};
use google_cloud_wkt::Struct;
use serde_json::Value;
use std::time::Duration;

pub mod bigquery_query;
pub mod bigquery_query_clustered_table;

/// How long to wait between checks for query job completion.
pub const POLLING_INTERVAL: Duration = Duration::from_millis(500);

/// Runs a query and returns all the result rows.
///
/// Each row is returned in the format used by the BigQuery API, that is, an
/// object with a single `f` field containing the list of cells. Use
/// [row_values] or [format_row] to extract the values.
pub async fn run_query(
    client: &JobService,
    project_id: &str,
    request: QueryRequest,
) -> anyhow::Result<Vec<Struct>> {
    let response = client
        .query()
        .set_project_id(project_id)
        .set_query_request(request)
        .send()
        .await?;
    check_errors(&response.errors)?;

    let complete = response.job_complete == Some(true);
    if complete && response.page_token.is_empty() {
        return Ok(response.rows);
    }
    let Some(job) = response.job_reference else {
        bail!("the query did not complete and the response has no job reference");
    };
    let location = job.location.unwrap_or_default();

    let (mut rows, mut page_token) = if complete {
        (response.rows, Some(response.page_token))
    } else {
        wait_for_job(client, project_id, &job.job_id, &location).await?;
        (Vec::new(), None)
    };

    // `None` means "fetch the first page", an empty token means there are no
    // more pages.
    while page_token.as_ref().is_none_or(|t| !t.is_empty()) {
        let page = client
            .get_query_results()
            .set_project_id(project_id)
            .set_job_id(&job.job_id)
            .set_location(&location)
            .set_page_token(page_token.unwrap_or_default())
            .send()
            .await?;
        check_errors(&page.errors)?;
        tracing::debug!("received {} rows for job {}", page.rows.len(), job.job_id);
        rows.extend(page.rows);
        page_token = Some(page.page_token);
    }

    Ok(rows)
}

async fn wait_for_job(
    client: &JobService,
    project_id: &str,
    job_id: &str,
    location: &str,
) -> anyhow::Result<()> {
    loop {
        tokio::time::sleep(POLLING_INTERVAL).await;
        let status = client
            .get_query_results()
            .set_project_id(project_id)
            .set_job_id(job_id)
            .set_location(location)
            .set_max_results(0_u32)
            .send()
            .await?;
        check_errors(&status.errors)?;
        if status.job_complete == Some(true) {
            return Ok(());
        }
        tracing::debug!("query job {job_id} is not complete");
    }
}

fn check_errors(errors: &[ErrorProto]) -> anyhow::Result<()> {
    match errors {
        [] => Ok(()),
        [first, ..] => bail!(
            "query failed with {} error(s), first error: {} ({})",
            errors.len(),
            first.message,
            first.reason
        ),
    }
}

/// Extracts the values in a result row as strings.
///
/// `NULL` values are returned as the `NULL` string. Nested values, such as
/// arrays and records, are returned in their JSON representation.
pub fn row_values(row: &Struct) -> Vec<String> {
    let Some(cells) = row.get("f").and_then(Value::as_array) else {
        return Vec::new();
    };
    cells
        .iter()
        .map(|cell| match cell.get("v") {
            None | Some(Value::Null) => "NULL".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(v) => v.to_string(),
        })
        .collect()
}

/// Formats a result row as `[v1 v2 ...]`.
pub fn format_row(row: &Struct) -> String {
    format!("[{}]", row_values(row).join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn to_struct(v: Value) -> Struct {
        v.as_object().cloned().unwrap_or_default()
    }

    #[test_case(json!({"f": [{"v": "1"}, {"v": "abc"}]}), vec!["1", "abc"]; "strings")]
    #[test_case(json!({"f": [{"v": null}, {}]}), vec!["NULL", "NULL"]; "nulls")]
    #[test_case(json!({"f": [{"v": [{"v": "1"}]}]}), vec![r#"[{"v":"1"}]"#]; "nested")]
    #[test_case(json!({"f": []}), vec![]; "empty")]
    #[test_case(json!({}), vec![]; "missing")]
    fn values(row: Value, want: Vec<&str>) {
        let got = row_values(&to_struct(row));
        assert_eq!(got, want);
    }

    #[test]
    fn format() {
        let row = to_struct(json!({"f": [{"v": "7"}, {"v": "12.5"}, {"v": null}]}));
        assert_eq!(format_row(&row), "[7 12.5 NULL]");
    }

    #[test]
    fn errors() {
        assert!(check_errors(&[]).is_ok());
        let errors = [
            ErrorProto::new()
                .set_reason("invalidQuery")
                .set_message("Syntax error"),
            ErrorProto::new().set_reason("other"),
        ];
        let got = check_errors(&errors);
        let msg = format!("{:?}", got.expect_err("errors are reported"));
        assert!(msg.contains("2 error(s)"), "{msg}");
        assert!(msg.contains("Syntax error (invalidQuery)"), "{msg}");
    }
}
