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

// [START kms_create_keyring]
use google_cloud_kms_v1::client::KeyManagementService;
use google_cloud_kms_v1::model::KeyRing;
use std::io::Write;

pub async fn sample<W: Write>(
    w: &mut W,
    client: &KeyManagementService,
    project_id: &str,
    key_ring_id: &str,
) -> anyhow::Result<()> {
    let key_ring = client
        .create_key_ring()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .set_key_ring_id(key_ring_id)
        .set_key_ring(KeyRing::new())
        .send()
        .await?;
    writeln!(w, "Created key ring: {}", key_ring.name)?;

    Ok(())
}
// [END kms_create_keyring]
