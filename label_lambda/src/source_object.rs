use aws_lambda_events::event::s3::S3Event;

use crate::error::HandlerError;

/// The uploaded object named by an S3 notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SourceObject {
    pub bucket: String,
    pub key: String,
}

impl SourceObject {
    /// Reads the bucket and key of the first record. Further records are ignored.
    ///
    /// The key is taken exactly as S3 delivers it (URL-encoded).
    pub(crate) fn from_event(event: &S3Event) -> Result<Self, HandlerError> {
        let record = event
            .records
            .first()
            .ok_or(HandlerError::MalformedEvent("Records[0]"))?;
        let bucket = record
            .s3
            .bucket
            .name
            .clone()
            .ok_or(HandlerError::MalformedEvent("Records[0].s3.bucket.name"))?;
        let key = record
            .s3
            .object
            .key
            .clone()
            .ok_or(HandlerError::MalformedEvent("Records[0].s3.object.key"))?;
        Ok(Self { bucket, key })
    }
}
