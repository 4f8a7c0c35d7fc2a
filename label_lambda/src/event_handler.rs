use aws_config::SdkConfig;
use aws_lambda_events::event::s3::S3Event;
use aws_sdk_rekognition::types::{Image, S3Object};
use aws_sdk_rekognition::Client as RekognitionClient;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use lambda_runtime::{tracing, Error, LambdaEvent};
use serde::Serialize;

use crate::error::HandlerError;
use crate::labels::LabelDetection;
use crate::source_object::SourceObject;

pub(crate) const MAX_LABELS: i32 = 10;
pub(crate) const MIN_CONFIDENCE: f32 = 70.0;
const RESULTS_PREFIX: &str = "results";

/// Clients built once per container and shared by every invocation.
pub(crate) struct Clients {
    pub rekognition: RekognitionClient,
    pub s3: S3Client,
}

impl Clients {
    pub(crate) fn new(config: &SdkConfig) -> Self {
        Self {
            rekognition: RekognitionClient::new(config),
            s3: S3Client::new(config),
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HandlerResponse {
    pub status_code: u16,
    pub body: String,
}

/// `results/<file name>.json`. Directories are dropped, so equal file names
/// under different prefixes share one result object.
pub(crate) fn result_key(key: &str) -> String {
    let file_name = key.rsplit('/').next().unwrap_or(key);
    format!("{RESULTS_PREFIX}/{file_name}.json")
}

async fn detect_labels(
    client: &RekognitionClient,
    source: &SourceObject,
) -> Result<LabelDetection, HandlerError> {
    let image = Image::builder()
        .s3_object(
            S3Object::builder()
                .bucket(&source.bucket)
                .name(&source.key)
                .build(),
        )
        .build();
    let output = client
        .detect_labels()
        .image(image)
        .max_labels(MAX_LABELS)
        .min_confidence(MIN_CONFIDENCE)
        .send()
        .await
        .map_err(|e| HandlerError::service("DetectLabels", e))?;
    Ok(LabelDetection::from(output))
}

async fn store_result(
    client: &S3Client,
    bucket: &str,
    key: &str,
    body: String,
) -> Result<(), HandlerError> {
    client
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(ByteStream::from(body.into_bytes()))
        .send()
        .await
        .map_err(|e| HandlerError::service("PutObject", e))?;
    Ok(())
}

pub(crate) async fn function_handler(
    event: LambdaEvent<S3Event>,
    clients: &Clients,
) -> Result<HandlerResponse, Error> {
    let source = SourceObject::from_event(&event.payload)?;
    tracing::info!("Processing image: {}", source.key);

    let detection = detect_labels(&clients.rekognition, &source).await?;

    let output_key = result_key(&source.key);
    let pretty = serde_json::to_string_pretty(&detection).map_err(HandlerError::from)?;
    store_result(&clients.s3, &source.bucket, &output_key, pretty).await?;
    tracing::info!("Results saved to: {}", output_key);

    Ok(HandlerResponse {
        status_code: 200,
        body: serde_json::to_string(&detection).map_err(HandlerError::from)?,
    })
}
