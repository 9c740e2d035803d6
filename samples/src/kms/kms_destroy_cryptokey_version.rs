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

// [START kms_destroy_cryptokey_version]
use google_cloud_kms_v1::client::KeyManagementService;
use std::io::Write;

pub async fn sample<W: Write>(
    w: &mut W,
    client: &KeyManagementService,
    project_id: &str,
    key_ring_id: &str,
    crypto_key_id: &str,
    version: &str,
) -> anyhow::Result<()> {
    // The version is scheduled for destruction, it can be restored until the
    // `destroy_time`.
    let destroyed = client
        .destroy_crypto_key_version()
        .set_name(format!(
            "projects/{project_id}/locations/global/keyRings/{key_ring_id}/cryptoKeys/{crypto_key_id}/cryptoKeyVersions/{version}"
        ))
        .send()
        .await?;
    writeln!(
        w,
        "Destroyed crypto key version: {} state={:?} destroy_time={:?}",
        destroyed.name, destroyed.state, destroyed.destroy_time
    )?;

    Ok(())
}
// [END kms_destroy_cryptokey_version]
