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

//! Helper functions and types to generate random resource names.

use rand::{
    Rng,
    distr::{Distribution, Uniform},
};

/// A common prefix for resource ids.
///
/// Where possible, we use this prefix for randomly generated resource ids.
pub const PREFIX: &str = "rust-sdk-testing-";

/// Batch job ids are limited to 63 characters, and must start with a letter.
const JOB_ID_LENGTH: usize = 63;

/// KMS key ring and crypto key ids are limited to 63 characters.
const KMS_ID_LENGTH: usize = 63;

const SLATE_PREFIX: &str = "slate-";

/// Generate a random Batch job id.
pub fn random_job_id() -> String {
    let id = LowercaseAlphanumeric.random_string(JOB_ID_LENGTH - PREFIX.len());
    format!("{PREFIX}{id}")
}

/// Generate a random KMS key ring id.
///
/// Key rings cannot be deleted, keep the names recognizable so they can be
/// found in the console.
pub fn random_key_ring_id() -> String {
    let id = LowercaseAlphanumeric.random_string(KMS_ID_LENGTH - PREFIX.len());
    format!("{PREFIX}{id}")
}

/// Generate a random KMS crypto key id.
pub fn random_crypto_key_id() -> String {
    const KEY_PREFIX: &str = "key-";
    let id = LowercaseAlphanumeric.random_string(KMS_ID_LENGTH - KEY_PREFIX.len());
    format!("{KEY_PREFIX}{id}")
}

/// Generate a random Video Stitcher slate id.
pub fn random_slate_id() -> String {
    format!("{SLATE_PREFIX}{}", uuid::Uuid::new_v4())
}

const LOWERCASE_ALPHANUMERIC_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Sample a `u8`, uniformly distributed over ASCII lowercase letters and numbers: a-z and 0-9.
///
/// # Example
/// ```
/// use cloud_samples_test_utils::resource_names::LowercaseAlphanumeric;
/// let got: String = LowercaseAlphanumeric.random_string(32);
/// assert_eq!(got.len(), 32);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseAlphanumeric;

impl LowercaseAlphanumeric {
    /// Create a string with `n` characters from the character set.
    pub fn random_string(&self, n: usize) -> String {
        rand::rng()
            .sample_iter(self)
            .take(n)
            .map(char::from)
            .collect()
    }
}

impl Distribution<u8> for LowercaseAlphanumeric {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        let u = Uniform::new(0, LOWERCASE_ALPHANUMERIC_CHARSET.len())
            .expect("hard-coded uniform distribution is initialized successfully")
            .sample(rng);
        LOWERCASE_ALPHANUMERIC_CHARSET[u]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use test_case::test_case;

    #[test_case(random_job_id(), JOB_ID_LENGTH; "job")]
    #[test_case(random_key_ring_id(), KMS_ID_LENGTH; "key ring")]
    fn prefixed_ids(got: String, max: usize) {
        assert!(
            PREFIX.len() < max,
            "{PREFIX} length ({}) should be smaller than {max}",
            PREFIX.len()
        );
        assert!(got.len() <= max, "{got} has more than {max} characters");
        let suffix = got
            .strip_prefix(PREFIX)
            .unwrap_or_else(|| panic!("{got} should start with {PREFIX}"));
        let test = is_ascii_lowercase_alphanumeric(suffix);
        assert!(test.is_ok(), "{test:?}");
    }

    #[test]
    fn crypto_key_id() {
        let got = random_crypto_key_id();
        assert_eq!(got.len(), KMS_ID_LENGTH, "{got}");
        assert!(got.starts_with("key-"), "{got}");
    }

    #[test]
    fn slate_id() {
        let got = random_slate_id();
        let suffix = got
            .strip_prefix(SLATE_PREFIX)
            .unwrap_or_else(|| panic!("{got} should start with {SLATE_PREFIX}"));
        let parsed = uuid::Uuid::parse_str(suffix);
        assert!(parsed.is_ok(), "{got} should end with a UUID: {parsed:?}");
        assert!(
            got.chars().all(|c| c == '-' || c.is_ascii_digit() || c.is_ascii_lowercase()),
            "slate ids only accept lowercase letters, digits and dashes: {got}"
        );
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(random_job_id(), random_job_id());
        assert_ne!(random_slate_id(), random_slate_id());
    }

    #[test]
    fn lowercase_string() {
        let got = LowercaseAlphanumeric.random_string(32);
        assert_eq!(got.len(), 32, "{got:?}");
        let test = is_ascii_lowercase_alphanumeric(&got);
        assert!(test.is_ok(), "{test:?}");
    }

    fn is_ascii_lowercase_alphanumeric(got: &str) -> anyhow::Result<()> {
        for (idx, c) in got.chars().enumerate() {
            if !c.is_ascii() {
                bail!("character at {idx} ({c}) is not ASCII in {got}")
            }
            if !c.is_ascii_lowercase() && !c.is_ascii_digit() {
                bail!("character at {idx} ({c}) is not in expected character class in {got}");
            }
        }
        Ok(())
    }
}
