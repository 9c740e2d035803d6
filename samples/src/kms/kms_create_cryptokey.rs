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

// [START kms_create_cryptokey]
use google_cloud_kms_v1::client::KeyManagementService;
use google_cloud_kms_v1::model::{CryptoKey, crypto_key::CryptoKeyPurpose};
use std::io::Write;

pub async fn sample<W: Write>(
    w: &mut W,
    client: &KeyManagementService,
    project_id: &str,
    key_ring_id: &str,
    crypto_key_id: &str,
) -> anyhow::Result<()> {
    let crypto_key = client
        .create_crypto_key()
        .set_parent(format!(
            "projects/{project_id}/locations/global/keyRings/{key_ring_id}"
        ))
        .set_crypto_key_id(crypto_key_id)
        .set_crypto_key(CryptoKey::new().set_purpose(CryptoKeyPurpose::EncryptDecrypt))
        .send()
        .await?;
    writeln!(w, "Created crypto key: {}", crypto_key.name)?;

    Ok(())
}
// [END kms_create_cryptokey]
