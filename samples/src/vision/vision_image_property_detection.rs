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

// [START vision_image_property_detection]
use super::{ImageInput, annotate};
use google_cloud_vision_v1::client::ImageAnnotator;
use google_cloud_vision_v1::model::feature;
use std::io::Write;

pub async fn sample<W: Write>(
    w: &mut W,
    client: &ImageAnnotator,
    image: &ImageInput,
) -> anyhow::Result<()> {
    let response = annotate(client, image, feature::Type::ImageProperties, None).await?;
    let colors = response
        .image_properties_annotation
        .and_then(|p| p.dominant_colors)
        .map(|d| d.colors)
        .unwrap_or_default();
    writeln!(w, "Dominant colors:")?;
    for info in colors {
        // The service returns each channel as a float in the [0, 255] range.
        let color = info.color.unwrap_or_default();
        writeln!(
            w,
            "{:.1}% - #{:02x}{:02x}{:02x}",
            info.pixel_fraction * 100.0,
            color.red as u8,
            color.green as u8,
            color.blue as u8
        )?;
    }

    Ok(())
}
// [END vision_image_property_detection]
