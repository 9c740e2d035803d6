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

//! Retry operations waiting for eventually consistent resources.
//!
//! Some resources take a few seconds to show up after they are created. For
//! example, the tasks of a Batch job are created by the service shortly after
//! the job. The tests poll for such resources using a fixed number of attempts
//! and a fixed interval between them.

use std::future::Future;
use std::time::Duration;

/// Runs an operation until it succeeds, or the attempts are exhausted.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// use cloud_samples_test_utils::retry::Retry;
/// use std::time::Duration;
/// let retry = Retry::new(3, Duration::from_millis(1));
/// let value = retry.run(|| async { anyhow::Ok(42) }).await?;
/// assert_eq!(value, 42);
/// # anyhow::Ok(()) });
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Retry {
    attempts: u32,
    interval: Duration,
}

impl Retry {
    /// Creates a new retry loop with `attempts` total attempts, sleeping
    /// `interval` between them.
    ///
    /// The operation always runs at least once, even if `attempts` is zero.
    pub fn new(attempts: u32, interval: Duration) -> Self {
        Self {
            attempts: attempts.max(1),
            interval,
        }
    }

    /// The total number of attempts.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The time between attempts.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Calls `f` until it returns `Ok(_)`.
    ///
    /// Returns the first successful value, or the error from the last attempt.
    pub async fn run<F, Fut, T>(&self, mut f: F) -> anyhow::Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = anyhow::Result<T>>,
    {
        let mut attempt = 1;
        loop {
            match f().await {
                Ok(v) => return Ok(v),
                Err(e) if attempt >= self.attempts => {
                    return Err(e.context(format!("giving up after {attempt} attempts")));
                }
                Err(e) => {
                    tracing::warn!("attempt {attempt}/{} failed: {e:?}", self.attempts);
                }
            }
            attempt += 1;
            tokio::time::sleep(self.interval).await;
        }
    }
}
