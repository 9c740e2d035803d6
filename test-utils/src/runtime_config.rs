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

//! Configuration for the integration tests, read from the environment.

use anyhow::Result;

const PROJECT_VAR: &str = "GOOGLE_CLOUD_PROJECT";
const MEMBER_VAR: &str = "GOOGLE_CLOUD_RUST_TEST_MEMBER";
const REGION_VAR: &str = "GOOGLE_CLOUD_RUST_TEST_REGION";
const DEFAULT_REGION: &str = "us-central1";

/// Returns the project id used for the integration tests.
pub fn project_id() -> Result<String> {
    std::env::var(PROJECT_VAR).map_err(anyhow::Error::from)
}

/// Returns an IAM principal, such as `serviceAccount:foo@...`, that the tests
/// can add to and remove from IAM policies.
pub fn test_member() -> Result<String> {
    std::env::var(MEMBER_VAR).map_err(anyhow::Error::from)
}

/// Returns the preferred region id used for the integration tests.
pub fn region_id() -> String {
    std::env::var(REGION_VAR)
        .ok()
        .unwrap_or(DEFAULT_REGION.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use serial_test::serial;

    #[serial]
    #[test]
    fn project() {
        let _env = ScopedEnv::remove(PROJECT_VAR);
        let got = project_id();
        assert!(got.is_err(), "{got:?}");
        let _env = ScopedEnv::set(PROJECT_VAR, "abc");
        let got = project_id();
        assert!(got.as_ref().is_ok_and(|v| v == "abc"), "{got:?}");
    }

    #[serial]
    #[test]
    fn member() {
        let _env = ScopedEnv::remove(MEMBER_VAR);
        let got = test_member();
        assert!(got.is_err(), "{got:?}");
        let _env = ScopedEnv::set(MEMBER_VAR, "user:alice@example.com");
        let got = test_member();
        assert!(
            got.as_ref().is_ok_and(|v| v == "user:alice@example.com"),
            "{got:?}"
        );
    }

    #[serial]
    #[test]
    fn region() {
        let _env = ScopedEnv::remove(REGION_VAR);
        let got = region_id();
        assert_eq!(got, DEFAULT_REGION);
        let _env = ScopedEnv::set(REGION_VAR, "abc");
        let got = region_id();
        assert_eq!(got, "abc");
    }
}
