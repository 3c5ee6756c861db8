use super::api_client::{ApiClient, Method};
use super::api_error::ApiError;
use uuid::Uuid;

/// Soft delete, restore and hard delete of a REST resource.
///
/// `DELETE {base}/{id}` marks the row deleted, `PUT {base}/{id}/undelete`
/// brings it back, `DELETE {base}/{id}/hard` removes it for good.
#[allow(async_fn_in_trait)]
pub trait RecordLifecycle {
    const BASE_PATH: &'static str;

    fn client(&self) -> &ApiClient;

    fn record_path(id: Uuid) -> String {
        format!("{}/{}", Self::BASE_PATH, id)
    }

    fn record_url(&self, id: Uuid) -> String {
        self.client().url(&Self::record_path(id))
    }

    fn restore_url(&self, id: Uuid) -> String {
        format!("{}/undelete", self.record_url(id))
    }

    fn hard_delete_url(&self, id: Uuid) -> String {
        format!("{}/hard", self.record_url(id))
    }

    async fn soft_delete(&self, id: Uuid) -> Result<(), ApiError> {
        self.client().send(Method::Delete, &self.record_url(id)).await
    }

    async fn restore(&self, id: Uuid) -> Result<(), ApiError> {
        self.client().send(Method::Put, &self.restore_url(id)).await
    }

    async fn hard_delete(&self, id: Uuid) -> Result<(), ApiError> {
        self.client()
            .send(Method::Delete, &self.hard_delete_url(id))
            .await
    }
}
