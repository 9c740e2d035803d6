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

//! Samples for [Cloud Vision].
//!
//! Each sample runs a single feature detector on a single image. The image
//! may be a local file, sent inline, or a `gs://` or `https://` URI that the
//! service fetches.
//!
//! [Cloud Vision]: https://cloud.google.com/vision/docs

use anyhow::Context;
use google_cloud_vision_v1::client::ImageAnnotator;
use google_cloud_vision_v1::model::{
    AnnotateImageRequest, AnnotateImageResponse, Feature, Image, ImageSource, feature,
};
use std::path::PathBuf;

pub mod vision_crop_hint_detection;
pub mod vision_face_detection;
pub mod vision_fulltext_detection;
pub mod vision_image_property_detection;
pub mod vision_label_detection;
pub mod vision_landmark_detection;
pub mod vision_logo_detection;
pub mod vision_safe_search_detection;
pub mod vision_text_detection;
pub mod vision_web_detection;

/// The default number of results for detectors returning a list.
pub const MAX_RESULTS: i32 = 10;

/// Where to find the image to annotate.
#[derive(Clone, Debug, PartialEq)]
pub enum ImageInput {
    /// A local file, its contents are sent with the request.
    Path(PathBuf),
    /// A `gs://` or `https://` URI.
    Uri(String),
}

impl ImageInput {
    async fn to_image(&self) -> anyhow::Result<Image> {
        let image = match self {
            Self::Path(path) => {
                let content = tokio::fs::read(path)
                    .await
                    .with_context(|| format!("cannot read image from {}", path.display()))?;
                Image::new().set_content(content)
            }
            Self::Uri(uri) => Image::new().set_source(ImageSource::new().set_image_uri(uri)),
        };
        Ok(image)
    }
}

impl std::str::FromStr for ImageInput {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if ["gs://", "http://", "https://"]
            .iter()
            .any(|scheme| s.starts_with(scheme))
        {
            return Ok(Self::Uri(s.to_string()));
        }
        Ok(Self::Path(PathBuf::from(s)))
    }
}

impl std::fmt::Display for ImageInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path(p) => write!(f, "{}", p.display()),
            Self::Uri(u) => write!(f, "{u}"),
        }
    }
}

/// Runs one detector on one image.
///
/// The service reports problems with individual images in the response,
/// not as a request failure. This function turns those into errors.
pub async fn annotate(
    client: &ImageAnnotator,
    input: &ImageInput,
    feature_type: feature::Type,
    max_results: Option<i32>,
) -> anyhow::Result<AnnotateImageResponse> {
    let mut feature = Feature::new().set_type(feature_type);
    if let Some(max) = max_results {
        feature = feature.set_max_results(max);
    }
    tracing::debug!(%input, ?feature, "annotating image");
    let request = AnnotateImageRequest::new()
        .set_image(input.to_image().await?)
        .set_features([feature]);
    let response = client
        .batch_annotate_images()
        .set_requests([request])
        .send()
        .await?;
    let mut responses = response.responses;
    if responses.len() != 1 {
        anyhow::bail!(
            "expected exactly one annotation response, got {}",
            responses.len()
        );
    }
    let annotations = responses.remove(0);
    if let Some(status) = &annotations.error {
        anyhow::bail!(
            "cannot annotate {input}: code={} message={}",
            status.code,
            status.message
        );
    }
    Ok(annotations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("gs://bucket/cat.jpg", ImageInput::Uri("gs://bucket/cat.jpg".into()); "gcs")]
    #[test_case("https://example.com/cat.jpg", ImageInput::Uri("https://example.com/cat.jpg".into()); "https")]
    #[test_case("testdata/cat.jpg", ImageInput::Path("testdata/cat.jpg".into()); "relative path")]
    #[test_case("/tmp/gs://odd.jpg", ImageInput::Path("/tmp/gs://odd.jpg".into()); "scheme not at start")]
    fn parse(input: &str, want: ImageInput) {
        let got = input.parse::<ImageInput>();
        assert_eq!(got, Ok(want));
    }

    #[tokio::test]
    async fn uri_image() -> anyhow::Result<()> {
        let input = ImageInput::Uri("gs://bucket/cat.jpg".into());
        let image = input.to_image().await?;
        assert!(image.content.is_empty(), "{image:?}");
        assert_eq!(
            image.source.map(|s| s.image_uri),
            Some("gs://bucket/cat.jpg".to_string())
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing_file() {
        let input = ImageInput::Path("/does/not/exist/cat.jpg".into());
        let err = input.to_image().await.unwrap_err();
        assert!(
            err.to_string().contains("/does/not/exist/cat.jpg"),
            "{err:?}"
        );
    }
}
