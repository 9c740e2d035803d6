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

//! Samples for the Google Cloud Client Libraries for Rust.
//!
//! Each module covers one service and each sample lives in its own file,
//! named after the region tag used to embed it in the documentation. The
//! samples receive the client as a parameter and write their output to a
//! [std::io::Write], so tests can run them against mocks and examine the
//! output.

pub mod batch;
pub mod bigquery;
pub mod cli;
pub mod kms;
pub mod videostitcher;
pub mod vision;
