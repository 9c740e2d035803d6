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

// [START vision_web_detection]
use super::{ImageInput, annotate};
use google_cloud_vision_v1::client::ImageAnnotator;
use google_cloud_vision_v1::model::feature;
use std::io::Write;

pub async fn sample<W: Write>(
    w: &mut W,
    client: &ImageAnnotator,
    image: &ImageInput,
) -> anyhow::Result<()> {
    let response = annotate(client, image, feature::Type::WebDetection, None).await?;
    let web = response.web_detection.unwrap_or_default();
    writeln!(w, "Web properties:")?;
    if !web.full_matching_images.is_empty() {
        writeln!(w, "\tFull image matches:")?;
        for full in &web.full_matching_images {
            writeln!(w, "\t\t{}", full.url)?;
        }
    }
    if !web.pages_with_matching_images.is_empty() {
        writeln!(w, "\tPages with this image:")?;
        for page in &web.pages_with_matching_images {
            writeln!(w, "\t\t{}", page.url)?;
        }
    }
    if !web.web_entities.is_empty() {
        writeln!(w, "\tEntities:")?;
        for entity in &web.web_entities {
            writeln!(w, "\t\t{:<12} {}", entity.entity_id, entity.description)?;
        }
    }

    Ok(())
}
// [END vision_web_detection]
