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

// [START kms_add_member_to_keyring_policy]
use google_cloud_iam_v1::model::Binding;
use google_cloud_kms_v1::client::KeyManagementService;
use std::io::Write;

pub async fn sample<W: Write>(
    w: &mut W,
    client: &KeyManagementService,
    project_id: &str,
    key_ring_id: &str,
    role: &str,
    member: &str,
) -> anyhow::Result<()> {
    let resource = format!(
        "projects/{project_id}/locations/global/keyRings/{key_ring_id}"
    );
    // Read-modify-write, the `etag` in the policy detects concurrent changes.
    let mut policy = client
        .get_iam_policy()
        .set_resource(&resource)
        .send()
        .await?;
    policy
        .bindings
        .push(Binding::new().set_role(role).set_members([member]));
    let policy = client
        .set_iam_policy()
        .set_resource(&resource)
        .set_policy(policy)
        .send()
        .await?;
    writeln!(w, "Added {member} to {resource} with {role}")?;
    writeln!(w, "Policy now has {} binding(s)", policy.bindings.len())?;

    Ok(())
}
// [END kms_add_member_to_keyring_policy]
