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

//! Verify the KMS samples forward their parameters and print the results.

#[cfg(test)]
mod tests {
    use cloud_samples::kms::*;
    use google_cloud_gax as gax;
    use google_cloud_iam_v1 as iam;
    use google_cloud_kms_v1 as kms;

    use gax::Result;
    use gax::options::RequestOptions;
    use gax::response::Response;
    use iam::model::{Binding, GetIamPolicyRequest, Policy, SetIamPolicyRequest};
    use kms::model::{
        CreateCryptoKeyRequest, CreateKeyRingRequest, CryptoKey, CryptoKeyVersion,
        DestroyCryptoKeyVersionRequest, KeyRing, RestoreCryptoKeyVersionRequest,
        UpdateCryptoKeyVersionRequest, crypto_key::CryptoKeyPurpose,
        crypto_key_version::CryptoKeyVersionState,
    };
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    const PROJECT: &str = "test-project";
    const RING: &str = "test-ring";
    const KEY: &str = "test-key";
    const ROLE: &str = "roles/cloudkms.cryptoKeyEncrypterDecrypter";
    const MEMBER: &str = "user:test@example.com";

    mockall::mock! {
        #[derive(Debug)]
        KeyManagementService {}
        impl kms::stub::KeyManagementService for KeyManagementService {
            async fn create_key_ring(&self, req: CreateKeyRingRequest, _options: RequestOptions) -> Result<Response<KeyRing>>;
            async fn create_crypto_key(&self, req: CreateCryptoKeyRequest, _options: RequestOptions) -> Result<Response<CryptoKey>>;
            async fn update_crypto_key_version(&self, req: UpdateCryptoKeyVersionRequest, _options: RequestOptions) -> Result<Response<CryptoKeyVersion>>;
            async fn destroy_crypto_key_version(&self, req: DestroyCryptoKeyVersionRequest, _options: RequestOptions) -> Result<Response<CryptoKeyVersion>>;
            async fn restore_crypto_key_version(&self, req: RestoreCryptoKeyVersionRequest, _options: RequestOptions) -> Result<Response<CryptoKeyVersion>>;
            async fn get_iam_policy(&self, req: GetIamPolicyRequest, _options: RequestOptions) -> Result<Response<Policy>>;
            async fn set_iam_policy(&self, req: SetIamPolicyRequest, _options: RequestOptions) -> Result<Response<Policy>>;
        }
    }

    fn ring_name() -> String {
        key_ring_name(PROJECT, RING)
    }

    fn key_name() -> String {
        crypto_key_name(PROJECT, RING, KEY)
    }

    fn version_name() -> String {
        crypto_key_version_name(PROJECT, RING, KEY, "1")
    }

    fn existing_policy() -> Policy {
        Policy::new().set_etag(bytes::Bytes::from_static(b"abc123")).set_bindings([
            Binding::new()
                .set_role("roles/cloudkms.admin")
                .set_members(["user:admin@example.com"]),
        ])
    }

    #[tokio::test]
    async fn create_key_ring() -> TestResult {
        let mut mock = MockKeyManagementService::new();
        mock.expect_create_key_ring()
            .withf(|r, _| {
                r.parent == location_name(PROJECT) && r.key_ring_id == RING && r.key_ring.is_some()
            })
            .return_once(|_, _| Ok(Response::from(KeyRing::new().set_name(ring_name()))));
        let client = kms::client::KeyManagementService::from_stub(mock);

        let mut buffer = Vec::new();
        kms_create_keyring::sample(&mut buffer, &client, PROJECT, RING).await?;
        let got = String::from_utf8(buffer)?;
        assert_eq!(got, format!("Created key ring: {}\n", ring_name()));
        Ok(())
    }

    #[tokio::test]
    async fn create_crypto_key() -> TestResult {
        let mut mock = MockKeyManagementService::new();
        mock.expect_create_crypto_key()
            .withf(|r, _| {
                r.parent == ring_name()
                    && r.crypto_key_id == KEY
                    && r.crypto_key.as_ref().map(|k| &k.purpose)
                        == Some(&CryptoKeyPurpose::EncryptDecrypt)
            })
            .return_once(|_, _| Ok(Response::from(CryptoKey::new().set_name(key_name()))));
        let client = kms::client::KeyManagementService::from_stub(mock);

        let mut buffer = Vec::new();
        kms_create_cryptokey::sample(&mut buffer, &client, PROJECT, RING, KEY).await?;
        let got = String::from_utf8(buffer)?;
        assert_eq!(got, format!("Created crypto key: {}\n", key_name()));
        Ok(())
    }

    #[test_case(CryptoKeyVersionState::Disabled, "Disabled"; "disable")]
    #[test_case(CryptoKeyVersionState::Enabled, "Enabled"; "enable")]
    #[tokio::test]
    async fn update_version_state(state: CryptoKeyVersionState, verb: &str) -> TestResult {
        let mut mock = MockKeyManagementService::new();
        let want = state.clone();
        mock.expect_update_crypto_key_version()
            .withf(move |r, _| {
                r.crypto_key_version
                    .as_ref()
                    .is_some_and(|v| v.name == version_name() && v.state == want)
                    && r.update_mask.as_ref().map(|m| m.paths.clone())
                        == Some(vec!["state".to_string()])
            })
            .return_once(move |r, _| Ok(Response::from(r.crypto_key_version.unwrap_or_default())));
        let client = kms::client::KeyManagementService::from_stub(mock);

        let mut buffer = Vec::new();
        if state == CryptoKeyVersionState::Disabled {
            kms_disable_cryptokey_version::sample(&mut buffer, &client, PROJECT, RING, KEY, "1")
                .await?;
        } else {
            kms_enable_cryptokey_version::sample(&mut buffer, &client, PROJECT, RING, KEY, "1")
                .await?;
        }
        let got = String::from_utf8(buffer)?;
        assert_eq!(got, format!("{verb} crypto key version: {}\n", version_name()));
        Ok(())
    }

    #[tokio::test]
    async fn destroy_version() -> TestResult {
        let mut mock = MockKeyManagementService::new();
        mock.expect_destroy_crypto_key_version()
            .withf(|r, _| r.name == version_name())
            .return_once(|r, _| {
                Ok(Response::from(
                    CryptoKeyVersion::new()
                        .set_name(r.name)
                        .set_state(CryptoKeyVersionState::DestroyScheduled),
                ))
            });
        let client = kms::client::KeyManagementService::from_stub(mock);

        let mut buffer = Vec::new();
        kms_destroy_cryptokey_version::sample(&mut buffer, &client, PROJECT, RING, KEY, "1")
            .await?;
        let got = String::from_utf8(buffer)?;
        assert!(
            got.starts_with(&format!("Destroyed crypto key version: {}", version_name())),
            "{got}"
        );
        assert!(got.contains("DestroyScheduled"), "{got}");
        Ok(())
    }

    #[tokio::test]
    async fn restore_version() -> TestResult {
        let mut mock = MockKeyManagementService::new();
        mock.expect_restore_crypto_key_version()
            .withf(|r, _| r.name == version_name())
            .return_once(|r, _| {
                Ok(Response::from(
                    CryptoKeyVersion::new()
                        .set_name(r.name)
                        .set_state(CryptoKeyVersionState::Disabled),
                ))
            });
        let client = kms::client::KeyManagementService::from_stub(mock);

        let mut buffer = Vec::new();
        kms_restore_cryptokey_version::sample(&mut buffer, &client, PROJECT, RING, KEY, "1")
            .await?;
        let got = String::from_utf8(buffer)?;
        assert!(
            got.starts_with(&format!("Restored crypto key version: {}", version_name())),
            "{got}"
        );
        Ok(())
    }

    #[test_case(false; "key ring")]
    #[test_case(true; "crypto key")]
    #[tokio::test]
    async fn get_policy(on_key: bool) -> TestResult {
        let resource = if on_key { key_name() } else { ring_name() };
        let mut mock = MockKeyManagementService::new();
        mock.expect_get_iam_policy()
            .withf(move |r, _| r.resource == resource)
            .return_once(|_, _| Ok(Response::from(existing_policy())));
        let client = kms::client::KeyManagementService::from_stub(mock);

        let mut buffer = Vec::new();
        if on_key {
            kms_get_cryptokey_policy::sample(&mut buffer, &client, PROJECT, RING, KEY).await?;
        } else {
            kms_get_keyring_policy::sample(&mut buffer, &client, PROJECT, RING).await?;
        }
        let got = String::from_utf8(buffer)?;
        assert_eq!(
            got,
            "Role: roles/cloudkms.admin\nMembers: [\"user:admin@example.com\"]\n"
        );
        Ok(())
    }

    #[test_case(false; "key ring")]
    #[test_case(true; "crypto key")]
    #[tokio::test]
    async fn add_member(on_key: bool) -> TestResult {
        let resource = if on_key { key_name() } else { ring_name() };
        let mut seq = mockall::Sequence::new();
        let mut mock = MockKeyManagementService::new();
        let want = resource.clone();
        mock.expect_get_iam_policy()
            .once()
            .in_sequence(&mut seq)
            .withf(move |r, _| r.resource == want)
            .return_once(|_, _| Ok(Response::from(existing_policy())));
        let want = resource.clone();
        mock.expect_set_iam_policy()
            .once()
            .in_sequence(&mut seq)
            .withf(move |r, _| {
                let Some(policy) = r.policy.as_ref() else {
                    return false;
                };
                r.resource == want
                    && policy.etag == bytes::Bytes::from_static(b"abc123")
                    && policy.bindings.len() == 2
                    && policy.bindings[1].role == ROLE
                    && policy.bindings[1].members == vec![MEMBER.to_string()]
            })
            .return_once(|r, _| Ok(Response::from(r.policy.unwrap_or_default())));
        let client = kms::client::KeyManagementService::from_stub(mock);

        let mut buffer = Vec::new();
        if on_key {
            kms_add_member_to_cryptokey_policy::sample(
                &mut buffer,
                &client,
                PROJECT,
                RING,
                KEY,
                ROLE,
                MEMBER,
            )
            .await?;
        } else {
            kms_add_member_to_keyring_policy::sample(
                &mut buffer,
                &client,
                PROJECT,
                RING,
                ROLE,
                MEMBER,
            )
            .await?;
        }
        let got = String::from_utf8(buffer)?;
        assert_eq!(
            got,
            format!("Added {MEMBER} to {resource} with {ROLE}\nPolicy now has 2 binding(s)\n")
        );
        Ok(())
    }

    #[tokio::test]
    async fn remove_member_from_key_ring() -> TestResult {
        let mut mock = MockKeyManagementService::new();
        mock.expect_get_iam_policy().return_once(|_, _| {
            Ok(Response::from(existing_policy().set_bindings([
                Binding::new().set_role(ROLE).set_members([MEMBER]),
            ])))
        });
        mock.expect_set_iam_policy()
            .withf(|r, _| {
                r.resource == ring_name()
                    && r.policy.as_ref().is_some_and(|p| p.bindings.is_empty())
            })
            .return_once(|r, _| Ok(Response::from(r.policy.unwrap_or_default())));
        let client = kms::client::KeyManagementService::from_stub(mock);

        let mut buffer = Vec::new();
        kms_remove_member_from_keyring_policy::sample(
            &mut buffer,
            &client,
            PROJECT,
            RING,
            ROLE,
            MEMBER,
        )
        .await?;
        let got = String::from_utf8(buffer)?;
        assert_eq!(
            got,
            format!("Removed {MEMBER} from {} with {ROLE}\n", ring_name())
        );
        Ok(())
    }

    #[tokio::test]
    async fn remove_member_not_bound() -> TestResult {
        let mut mock = MockKeyManagementService::new();
        mock.expect_get_iam_policy()
            .return_once(|_, _| Ok(Response::from(existing_policy())));
        mock.expect_set_iam_policy().never();
        let client = kms::client::KeyManagementService::from_stub(mock);

        let mut buffer = Vec::new();
        kms_remove_member_from_keyring_policy::sample(
            &mut buffer,
            &client,
            PROJECT,
            RING,
            ROLE,
            MEMBER,
        )
        .await?;
        let got = String::from_utf8(buffer)?;
        assert_eq!(
            got,
            format!("{MEMBER} does not have {ROLE} on {}\n", ring_name())
        );
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> TestResult {
        use gax::error::rpc::{Code, Status};
        let mut mock = MockKeyManagementService::new();
        mock.expect_create_key_ring().return_once(|_, _| {
            Err(gax::error::Error::service(
                Status::default()
                    .set_code(Code::AlreadyExists)
                    .set_message("key ring exists"),
            ))
        });
        let client = kms::client::KeyManagementService::from_stub(mock);

        let mut buffer = Vec::new();
        let err = kms_create_keyring::sample(&mut buffer, &client, PROJECT, RING)
            .await
            .unwrap_err();
        let svc = err
            .downcast_ref::<gax::error::Error>()
            .and_then(|e| e.status())
            .map(|s| s.code);
        assert_eq!(svc, Some(Code::AlreadyExists), "{err:?}");
        assert!(buffer.is_empty());
        Ok(())
    }
}
