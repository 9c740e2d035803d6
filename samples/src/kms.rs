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

//! Samples for [Cloud KMS].
//!
//! All the samples use key rings in the `global` location.
//!
//! [Cloud KMS]: https://cloud.google.com/kms/docs

use google_cloud_iam_v1::model::Policy;

pub mod kms_add_member_to_cryptokey_policy;
pub mod kms_add_member_to_keyring_policy;
pub mod kms_create_cryptokey;
pub mod kms_create_keyring;
pub mod kms_destroy_cryptokey_version;
pub mod kms_disable_cryptokey_version;
pub mod kms_enable_cryptokey_version;
pub mod kms_get_cryptokey_policy;
pub mod kms_get_keyring_policy;
pub mod kms_remove_member_from_keyring_policy;
pub mod kms_restore_cryptokey_version;

pub const LOCATION: &str = "global";

pub fn location_name(project_id: &str) -> String {
    format!("projects/{project_id}/locations/{LOCATION}")
}

pub fn key_ring_name(project_id: &str, key_ring_id: &str) -> String {
    format!("{}/keyRings/{key_ring_id}", location_name(project_id))
}

pub fn crypto_key_name(project_id: &str, key_ring_id: &str, crypto_key_id: &str) -> String {
    format!(
        "{}/cryptoKeys/{crypto_key_id}",
        key_ring_name(project_id, key_ring_id)
    )
}

pub fn crypto_key_version_name(
    project_id: &str,
    key_ring_id: &str,
    crypto_key_id: &str,
    version: &str,
) -> String {
    format!(
        "{}/cryptoKeyVersions/{version}",
        crypto_key_name(project_id, key_ring_id, crypto_key_id)
    )
}

/// Removes `member` from the bindings for `role`.
///
/// Bindings left without members are removed from the policy. Returns `true`
/// if the policy changed.
pub fn remove_member(policy: &mut Policy, role: &str, member: &str) -> bool {
    let mut changed = false;
    for binding in policy.bindings.iter_mut().filter(|b| b.role == role) {
        let before = binding.members.len();
        binding.members.retain(|m| m != member);
        changed = changed || binding.members.len() != before;
    }
    policy.bindings.retain(|b| !b.members.is_empty());
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use google_cloud_iam_v1::model::Binding;

    #[test]
    fn names() {
        assert_eq!(
            crypto_key_version_name("p", "r", "k", "1"),
            "projects/p/locations/global/keyRings/r/cryptoKeys/k/cryptoKeyVersions/1"
        );
    }

    #[test]
    fn remove() {
        let mut policy = Policy::new().set_bindings([
            Binding::new()
                .set_role("roles/cloudkms.cryptoKeyEncrypter")
                .set_members(["user:a@example.com", "user:b@example.com"]),
            Binding::new()
                .set_role("roles/cloudkms.cryptoKeyDecrypter")
                .set_members(["user:a@example.com"]),
            Binding::new()
                .set_role("roles/cloudkms.cryptoKeyEncrypter")
                .set_members(["user:a@example.com"]),
        ]);
        assert!(remove_member(
            &mut policy,
            "roles/cloudkms.cryptoKeyEncrypter",
            "user:a@example.com"
        ));
        let got = policy
            .bindings
            .iter()
            .map(|b| (b.role.as_str(), b.members.clone()))
            .collect::<Vec<_>>();
        assert_eq!(
            got,
            vec![
                (
                    "roles/cloudkms.cryptoKeyEncrypter",
                    vec!["user:b@example.com".to_string()]
                ),
                (
                    "roles/cloudkms.cryptoKeyDecrypter",
                    vec!["user:a@example.com".to_string()]
                ),
            ]
        );
    }

    #[test]
    fn remove_missing() {
        let mut policy = Policy::new().set_bindings([Binding::new()
            .set_role("roles/cloudkms.admin")
            .set_members(["user:a@example.com"])]);
        let before = policy.clone();
        assert!(!remove_member(&mut policy, "roles/cloudkms.admin", "user:z@example.com"));
        assert_eq!(policy, before);
    }
}
