use aws_lambda_events::event::s3::{S3Bucket, S3Entity, S3Event, S3EventRecord, S3Object};

pub(crate) fn s3_record(bucket: Option<&str>, key: Option<&str>) -> S3EventRecord {
    S3EventRecord {
        s3: S3Entity {
            bucket: S3Bucket {
                name: bucket.map(str::to_string),
                ..Default::default()
            },
            object: S3Object {
                key: key.map(str::to_string),
                size: Some(1234),
                ..Default::default()
            },
            schema_version: Some("1.0".to_string()),
            configuration_id: Some("config-id".to_string()),
        },
        ..Default::default()
    }
}

pub(crate) fn s3_event(bucket: Option<&str>, key: Option<&str>) -> S3Event {
    S3Event {
        records: vec![s3_record(bucket, key)],
    }
}
