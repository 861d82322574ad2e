use serde::{Deserialize, Serialize};

/// Bucket names visible to the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListStorageAreasResult {
    pub storage_areas: Vec<String>,
}

/// Optional filter applied to the bucket listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStorageAreasQuery {
    #[serde(default)]
    pub prefix: Option<String>,
}
