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

// [START vision_label_detection]
use super::{ImageInput, MAX_RESULTS, annotate};
use google_cloud_vision_v1::client::ImageAnnotator;
use google_cloud_vision_v1::model::feature;
use std::io::Write;

pub async fn sample<W: Write>(
    w: &mut W,
    client: &ImageAnnotator,
    image: &ImageInput,
) -> anyhow::Result<()> {
    let response = annotate(
        client,
        image,
        feature::Type::LabelDetection,
        Some(MAX_RESULTS),
    )
    .await?;
    if response.label_annotations.is_empty() {
        writeln!(w, "No labels found.")?;
        return Ok(());
    }
    writeln!(w, "Labels:")?;
    for annotation in &response.label_annotations {
        writeln!(w, "{}", annotation.description)?;
    }

    Ok(())
}
// [END vision_label_detection]
