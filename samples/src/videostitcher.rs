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

//! Samples for the [Video Stitcher API].
//!
//! Slates are the videos shown while an ad break has no ads to play. The
//! create, update and delete operations are long-running.
//!
//! [Video Stitcher API]: https://cloud.google.com/video-stitcher/docs

use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_lro::Poller;
use google_cloud_video_stitcher_v1::client::VideoStitcherService;

pub mod videostitcher_create_slate;
pub mod videostitcher_delete_slate;
pub mod videostitcher_get_slate;
pub mod videostitcher_list_slates;
pub mod videostitcher_update_slate;

pub const LOCATION: &str = "us-central1";

pub fn parent(project_id: &str) -> String {
    format!("projects/{project_id}/locations/{LOCATION}")
}

pub fn slate_name(project_id: &str, slate_id: &str) -> String {
    format!("{}/slates/{slate_id}", parent(project_id))
}

/// Deletes slates left behind by previous test runs.
///
/// Only slates whose id starts with `prefix` are considered, so slates
/// created by other users of the project are left alone.
pub async fn cleanup_stale_slates(
    client: &VideoStitcherService,
    project_id: &str,
    prefix: &str,
) -> anyhow::Result<()> {
    let stale_prefix = format!("{}/slates/{prefix}", parent(project_id));
    let mut names = Vec::new();
    let mut slates = client
        .list_slates()
        .set_parent(parent(project_id))
        .by_item();
    while let Some(slate) = slates.next().await.transpose()? {
        if slate.name.starts_with(&stale_prefix) {
            names.push(slate.name);
        }
    }
    tracing::info!("found {} stale slates", names.len());
    for name in names {
        match client.delete_slate().set_name(&name).poller().until_done().await {
            Ok(()) => tracing::info!("deleted stale slate {name}"),
            Err(e) => tracing::warn!("error deleting stale slate {name}: {e:?}"),
        }
    }
    Ok(())
}
