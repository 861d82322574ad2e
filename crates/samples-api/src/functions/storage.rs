use crate::handler::{ApiGatewayRequestHandler, RequestType};
use async_trait::async_trait;
use lambda_http::http::Method;
use samples_core::models::{ListStorageAreasQuery, ListStorageAreasResult};
use samples_core::services::StorageService;
use samples_core::{Invocation, SampleError};
use std::sync::Arc;

/// Lists the S3 buckets visible to the function
pub struct ListBuckets {
    storage: Arc<dyn StorageService>,
}

impl ListBuckets {
    pub fn new(storage: Arc<dyn StorageService>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl ApiGatewayRequestHandler for ListBuckets {
    type Input = ListStorageAreasQuery;
    type Output = ListStorageAreasResult;

    fn name(&self) -> &'static str {
        "list_buckets"
    }

    fn method(&self) -> Option<Method> {
        Some(Method::GET)
    }

    fn request_type(&self) -> RequestType {
        RequestType::Querystring
    }

    async fn process(
        &self,
        input: Self::Input,
        invocation: &Invocation,
    ) -> Result<Self::Output, SampleError> {
        let listing = invocation
            .deadline
            .run("list_buckets", self.storage.list_buckets(input.prefix))
            .await;

        let storage_areas = match listing {
            Ok(names) => names,
            Err(err @ SampleError::Timeout(_)) => return Err(err),
            Err(e) => {
                tracing::error!(error = %e, "Failed to list buckets");
                Vec::new()
            }
        };

        Ok(ListStorageAreasResult { storage_areas })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use samples_core::services::InMemoryStorage;

    #[tokio::test]
    async fn test_prefix_filter() {
        let handler = ListBuckets::new(Arc::new(InMemoryStorage::with_buckets(&[
            "logs-2024",
            "logs-2025",
            "assets",
        ])));

        let output = handler
            .process(
                ListStorageAreasQuery {
                    prefix: Some("logs".to_string()),
                },
                &Invocation::default(),
            )
            .await
            .unwrap();

        assert_eq!(output.storage_areas, vec!["logs-2024", "logs-2025"]);
    }
}
