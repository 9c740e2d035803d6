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

//! Command-line interface to run the samples.

use crate::vision::ImageInput;
use crate::{batch, bigquery, kms, videostitcher, vision};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::Write;

/// Runs the Google Cloud samples for Batch, BigQuery, KMS, Vision and the
/// Video Stitcher API.
///
/// The samples use Application Default Credentials.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// The project used by the samples.
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    pub project_id: String,

    #[command(subcommand)]
    pub service: Service,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Service {
    /// Create, examine and delete Batch jobs.
    Batch(BatchArgs),
    /// Run BigQuery queries.
    #[command(subcommand)]
    Bigquery(BigQueryCommand),
    /// Manage KMS key rings, crypto keys and their IAM policies.
    #[command(subcommand)]
    Kms(KmsCommand),
    /// Run a single Vision detector on an image.
    Vision(VisionArgs),
    /// Manage Video Stitcher slates.
    #[command(subcommand)]
    Videostitcher(SlateCommand),
}

#[derive(Clone, Debug, Args)]
pub struct BatchArgs {
    /// The region for the Batch jobs.
    #[arg(long, default_value = "us-central1")]
    pub region: String,

    #[command(subcommand)]
    pub command: BatchCommand,
}

#[derive(Clone, Debug, Subcommand)]
pub enum BatchCommand {
    /// Create a job running a shell script.
    CreateScriptJob { job_id: String },
    /// Create a job running a container.
    CreateContainerJob { job_id: String },
    GetJob { job_id: String },
    ListJobs,
    GetTask {
        job_id: String,
        #[arg(long, default_value = batch::DEFAULT_TASK_GROUP)]
        group: String,
        #[arg(long, default_value_t = 0)]
        index: u32,
    },
    ListTasks {
        job_id: String,
        #[arg(long, default_value = batch::DEFAULT_TASK_GROUP)]
        group: String,
    },
    DeleteJob { job_id: String },
}

#[derive(Clone, Debug, Subcommand)]
pub enum BigQueryCommand {
    /// Query the `usa_names` public dataset.
    Query,
    /// Query a clustered table of transactions.
    QueryClusteredTable { dataset_id: String, table_id: String },
}

#[derive(Clone, Debug, Subcommand)]
pub enum KmsCommand {
    CreateKeyRing {
        key_ring_id: String,
    },
    CreateCryptoKey {
        key_ring_id: String,
        crypto_key_id: String,
    },
    DisableVersion {
        key_ring_id: String,
        crypto_key_id: String,
        version: String,
    },
    EnableVersion {
        key_ring_id: String,
        crypto_key_id: String,
        version: String,
    },
    /// Schedule a crypto key version for destruction.
    DestroyVersion {
        key_ring_id: String,
        crypto_key_id: String,
        version: String,
    },
    /// Restore a crypto key version scheduled for destruction.
    RestoreVersion {
        key_ring_id: String,
        crypto_key_id: String,
        version: String,
    },
    GetKeyRingPolicy {
        key_ring_id: String,
    },
    AddMemberKeyRingPolicy {
        key_ring_id: String,
        role: String,
        member: String,
    },
    RemoveMemberKeyRingPolicy {
        key_ring_id: String,
        role: String,
        member: String,
    },
    GetCryptoKeyPolicy {
        key_ring_id: String,
        crypto_key_id: String,
    },
    AddMemberCryptoKeyPolicy {
        key_ring_id: String,
        crypto_key_id: String,
        role: String,
        member: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct VisionArgs {
    pub detector: Detector,

    /// A local file, or a `gs://` or `https://` URI.
    pub image: ImageInput,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum Detector {
    Faces,
    Labels,
    Landmarks,
    Text,
    DocumentText,
    Properties,
    CropHints,
    SafeSearch,
    Web,
    Logos,
}

#[derive(Clone, Debug, Subcommand)]
pub enum SlateCommand {
    CreateSlate { slate_id: String, uri: String },
    GetSlate { slate_id: String },
    ListSlates,
    UpdateSlate { slate_id: String, uri: String },
    DeleteSlate { slate_id: String },
}

/// Creates the client for the selected service and runs one sample.
pub async fn run<W: Write>(w: &mut W, cli: Cli) -> anyhow::Result<()> {
    let project_id = cli.project_id.as_str();
    tracing::debug!(?cli.service, project_id, "running sample");
    match cli.service {
        Service::Batch(args) => run_batch(w, project_id, args).await,
        Service::Bigquery(command) => run_bigquery(w, project_id, command).await,
        Service::Kms(command) => run_kms(w, project_id, command).await,
        Service::Vision(args) => run_vision(w, args).await,
        Service::Videostitcher(command) => run_videostitcher(w, project_id, command).await,
    }
}

async fn run_batch<W: Write>(w: &mut W, project_id: &str, args: BatchArgs) -> anyhow::Result<()> {
    use batch::*;
    let client = google_cloud_batch_v1::client::BatchService::builder()
        .build()
        .await?;
    let region = args.region.as_str();
    match args.command {
        BatchCommand::CreateScriptJob { job_id } => {
            batch_create_script_job::sample(w, &client, project_id, region, &job_id).await
        }
        BatchCommand::CreateContainerJob { job_id } => {
            batch_create_container_job::sample(w, &client, project_id, region, &job_id).await
        }
        BatchCommand::GetJob { job_id } => {
            batch_get_job::sample(w, &client, project_id, region, &job_id).await
        }
        BatchCommand::ListJobs => batch_list_jobs::sample(w, &client, project_id, region).await,
        BatchCommand::GetTask {
            job_id,
            group,
            index,
        } => batch_get_task::sample(w, &client, project_id, region, &job_id, &group, index).await,
        BatchCommand::ListTasks { job_id, group } => {
            batch_list_tasks::sample(w, &client, project_id, region, &job_id, &group).await
        }
        BatchCommand::DeleteJob { job_id } => {
            batch_delete_job::sample(w, &client, project_id, region, &job_id).await
        }
    }
}

async fn run_bigquery<W: Write>(
    w: &mut W,
    project_id: &str,
    command: BigQueryCommand,
) -> anyhow::Result<()> {
    use bigquery::*;
    let client = google_cloud_bigquery_v2::client::JobService::builder()
        .build()
        .await?;
    match command {
        BigQueryCommand::Query => bigquery_query::sample(w, &client, project_id).await,
        BigQueryCommand::QueryClusteredTable {
            dataset_id,
            table_id,
        } => {
            bigquery_query_clustered_table::sample(w, &client, project_id, &dataset_id, &table_id)
                .await
        }
    }
}

async fn run_kms<W: Write>(w: &mut W, project_id: &str, command: KmsCommand) -> anyhow::Result<()> {
    use kms::*;
    let client = google_cloud_kms_v1::client::KeyManagementService::builder()
        .build()
        .await?;
    let p = project_id;
    match command {
        KmsCommand::CreateKeyRing { key_ring_id } => {
            kms_create_keyring::sample(w, &client, p, &key_ring_id).await
        }
        KmsCommand::CreateCryptoKey {
            key_ring_id,
            crypto_key_id,
        } => kms_create_cryptokey::sample(w, &client, p, &key_ring_id, &crypto_key_id).await,
        KmsCommand::DisableVersion {
            key_ring_id,
            crypto_key_id,
            version,
        } => {
            kms_disable_cryptokey_version::sample(
                w,
                &client,
                p,
                &key_ring_id,
                &crypto_key_id,
                &version,
            )
            .await
        }
        KmsCommand::EnableVersion {
            key_ring_id,
            crypto_key_id,
            version,
        } => {
            kms_enable_cryptokey_version::sample(
                w,
                &client,
                p,
                &key_ring_id,
                &crypto_key_id,
                &version,
            )
            .await
        }
        KmsCommand::DestroyVersion {
            key_ring_id,
            crypto_key_id,
            version,
        } => {
            kms_destroy_cryptokey_version::sample(
                w,
                &client,
                p,
                &key_ring_id,
                &crypto_key_id,
                &version,
            )
            .await
        }
        KmsCommand::RestoreVersion {
            key_ring_id,
            crypto_key_id,
            version,
        } => {
            kms_restore_cryptokey_version::sample(
                w,
                &client,
                p,
                &key_ring_id,
                &crypto_key_id,
                &version,
            )
            .await
        }
        KmsCommand::GetKeyRingPolicy { key_ring_id } => {
            kms_get_keyring_policy::sample(w, &client, p, &key_ring_id).await
        }
        KmsCommand::AddMemberKeyRingPolicy {
            key_ring_id,
            role,
            member,
        } => {
            kms_add_member_to_keyring_policy::sample(w, &client, p, &key_ring_id, &role, &member)
                .await
        }
        KmsCommand::RemoveMemberKeyRingPolicy {
            key_ring_id,
            role,
            member,
        } => {
            kms_remove_member_from_keyring_policy::sample(
                w,
                &client,
                p,
                &key_ring_id,
                &role,
                &member,
            )
            .await
        }
        KmsCommand::GetCryptoKeyPolicy {
            key_ring_id,
            crypto_key_id,
        } => kms_get_cryptokey_policy::sample(w, &client, p, &key_ring_id, &crypto_key_id).await,
        KmsCommand::AddMemberCryptoKeyPolicy {
            key_ring_id,
            crypto_key_id,
            role,
            member,
        } => {
            kms_add_member_to_cryptokey_policy::sample(
                w,
                &client,
                p,
                &key_ring_id,
                &crypto_key_id,
                &role,
                &member,
            )
            .await
        }
    }
}

async fn run_vision<W: Write>(w: &mut W, args: VisionArgs) -> anyhow::Result<()> {
    use vision::*;
    let client = google_cloud_vision_v1::client::ImageAnnotator::builder()
        .build()
        .await?;
    let image = &args.image;
    match args.detector {
        Detector::Faces => vision_face_detection::sample(w, &client, image).await,
        Detector::Labels => vision_label_detection::sample(w, &client, image).await,
        Detector::Landmarks => vision_landmark_detection::sample(w, &client, image).await,
        Detector::Text => vision_text_detection::sample(w, &client, image).await,
        Detector::DocumentText => vision_fulltext_detection::sample(w, &client, image).await,
        Detector::Properties => vision_image_property_detection::sample(w, &client, image).await,
        Detector::CropHints => vision_crop_hint_detection::sample(w, &client, image).await,
        Detector::SafeSearch => vision_safe_search_detection::sample(w, &client, image).await,
        Detector::Web => vision_web_detection::sample(w, &client, image).await,
        Detector::Logos => vision_logo_detection::sample(w, &client, image).await,
    }
}

async fn run_videostitcher<W: Write>(
    w: &mut W,
    project_id: &str,
    command: SlateCommand,
) -> anyhow::Result<()> {
    use videostitcher::*;
    let client = google_cloud_video_stitcher_v1::client::VideoStitcherService::builder()
        .build()
        .await?;
    match command {
        SlateCommand::CreateSlate { slate_id, uri } => {
            videostitcher_create_slate::sample(w, &client, project_id, &slate_id, &uri).await
        }
        SlateCommand::GetSlate { slate_id } => {
            videostitcher_get_slate::sample(w, &client, project_id, &slate_id).await
        }
        SlateCommand::ListSlates => {
            videostitcher_list_slates::sample(w, &client, project_id).await
        }
        SlateCommand::UpdateSlate { slate_id, uri } => {
            videostitcher_update_slate::sample(w, &client, project_id, &slate_id, &uri).await
        }
        SlateCommand::DeleteSlate { slate_id } => {
            videostitcher_delete_slate::sample(w, &client, project_id, &slate_id).await
        }
    }
}
