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

// [START videostitcher_get_slate]
use google_cloud_video_stitcher_v1::client::VideoStitcherService;
use std::io::Write;

pub async fn sample<W: Write>(
    w: &mut W,
    client: &VideoStitcherService,
    project_id: &str,
    slate_id: &str,
) -> anyhow::Result<()> {
    let slate = client
        .get_slate()
        .set_name(format!(
            "projects/{project_id}/locations/us-central1/slates/{slate_id}"
        ))
        .send()
        .await?;
    writeln!(w, "Slate: {}", slate.name)?;
    writeln!(w, "URI: {}", slate.uri)?;

    Ok(())
}
// [END videostitcher_get_slate]
