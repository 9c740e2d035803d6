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

// [START bigquery_query_clustered_table]
use super::{format_row, run_query};
use google_cloud_bigquery_v2::client::JobService;
use google_cloud_bigquery_v2::model::{
    QueryParameter, QueryParameterType, QueryParameterValue, QueryRequest,
};
use std::io::Write;

/// Queries a table that has a clustering specification.
pub async fn sample<W: Write>(
    w: &mut W,
    client: &JobService,
    project_id: &str,
    dataset_id: &str,
    table_id: &str,
) -> anyhow::Result<()> {
    let sql = format!(
        r#"SELECT
  COUNT(1) as transactions,
  SUM(amount) as total_paid,
  COUNT(DISTINCT destination) as distinct_recipients
FROM
  `{dataset_id}.{table_id}`
WHERE
  timestamp > TIMESTAMP('2015-01-01')
  AND origin = @wallet"#
    );
    let wallet = QueryParameter::new()
        .set_name("wallet")
        .set_parameter_type(QueryParameterType::new().set_type("STRING"))
        .set_parameter_value(QueryParameterValue::new().set_value("wallet00001866cb7e0f09a890"));
    let request = QueryRequest::new()
        .set_query(sql)
        .set_use_legacy_sql(false)
        .set_parameter_mode("NAMED")
        .set_query_parameters([wallet]);

    // Wait for the query job to complete and print all the rows.
    let rows = run_query(client, project_id, request).await?;
    for row in &rows {
        writeln!(w, "{}", format_row(row))?;
    }

    Ok(())
}
// [END bigquery_query_clustered_table]
