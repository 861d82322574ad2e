use super::events::S3EventRecord;
use serde::{Deserialize, Serialize};

/// Queue message describing an S3 object event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3NotificationMessage {
    pub bucket_name: String,
    pub object_key: String,
    pub event_name: String,
}

impl S3NotificationMessage {
    /// Builds the message from a record, `None` when it carries no S3 section
    pub fn from_record(record: &S3EventRecord) -> Option<Self> {
        let s3 = record.s3.as_ref()?;
        Some(Self {
            bucket_name: s3.bucket.name.clone(),
            object_key: s3.object.key.clone(),
            event_name: record.event_name.clone(),
        })
    }
}
