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

// [START kms_enable_cryptokey_version]
use google_cloud_kms_v1::client::KeyManagementService;
use google_cloud_kms_v1::model::{CryptoKeyVersion, crypto_key_version::CryptoKeyVersionState};
use google_cloud_wkt::FieldMask;
use std::io::Write;

pub async fn sample<W: Write>(
    w: &mut W,
    client: &KeyManagementService,
    project_id: &str,
    key_ring_id: &str,
    crypto_key_id: &str,
    version: &str,
) -> anyhow::Result<()> {
    let name = format!(
        "projects/{project_id}/locations/global/keyRings/{key_ring_id}/cryptoKeys/{crypto_key_id}/cryptoKeyVersions/{version}"
    );
    let updated = client
        .update_crypto_key_version()
        .set_crypto_key_version(
            CryptoKeyVersion::new()
                .set_name(name)
                .set_state(CryptoKeyVersionState::Enabled),
        )
        .set_update_mask(FieldMask::default().set_paths(["state"]))
        .send()
        .await?;
    writeln!(w, "Enabled crypto key version: {}", updated.name)?;

    Ok(())
}
// [END kms_enable_cryptokey_version]
