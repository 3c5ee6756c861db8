use crate::shared::api_client::{ApiClient, Method};
use crate::shared::api_error::ApiError;
use crate::shared::record_lifecycle::RecordLifecycle;
use contracts::domain::a003_store::{StoreDto, StoreForm, VerifyStoreQuery};
use contracts::shared::{PageQuery, PagedResult};
use uuid::Uuid;

pub const STORES_PATH: &str = "/api/stores";

#[derive(Clone, Copy)]
pub struct StoreService {
    client: ApiClient,
}

impl StoreService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn list_url(&self, query: &PageQuery) -> Result<String, ApiError> {
        self.client.url_with_query(STORES_PATH, query)
    }

    pub fn verify_url(&self, id: Uuid, is_verified: bool) -> Result<String, ApiError> {
        let path = format!("{}/verify", Self::record_path(id));
        self.client
            .url_with_query(&path, &VerifyStoreQuery { is_verified })
    }

    pub async fn list(&self, query: &PageQuery) -> Result<PagedResult<StoreDto>, ApiError> {
        self.client.get(&self.list_url(query)?).await
    }

    pub async fn get(&self, id: Uuid) -> Result<StoreDto, ApiError> {
        self.client.get(&self.record_url(id)).await
    }

    pub async fn create(&self, form: &StoreForm) -> Result<StoreDto, ApiError> {
        self.client.post_json(&self.client.url(STORES_PATH), form).await
    }

    pub async fn update(&self, id: Uuid, form: &StoreForm) -> Result<StoreDto, ApiError> {
        self.client.put_json(&self.record_url(id), form).await
    }

    pub async fn set_verified(&self, id: Uuid, is_verified: bool) -> Result<(), ApiError> {
        let url = self.verify_url(id, is_verified)?;
        self.client.send(Method::Put, &url).await
    }
}

impl RecordLifecycle for StoreService {
    const BASE_PATH: &'static str = STORES_PATH;

    fn client(&self) -> &ApiClient {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> StoreService {
        StoreService::new(ApiClient::new("http://localhost:5000", 1000))
    }

    #[test]
    fn test_verify_url() {
        let id = Uuid::parse_str("a3c1d7e2-9b4f-4e10-8d2a-5c6b7e8f9a01").unwrap();
        let url = service().verify_url(id, true).unwrap();
        assert_eq!(
            url,
            "http://localhost:5000/api/stores/a3c1d7e2-9b4f-4e10-8d2a-5c6b7e8f9a01/verify?IsVerified=true"
        );
    }

    #[test]
    fn test_lifecycle_urls() {
        let svc = service();
        assert_eq!(
            svc.record_url(Uuid::nil()),
            "http://localhost:5000/api/stores/00000000-0000-0000-0000-000000000000"
        );
        assert!(svc.hard_delete_url(Uuid::nil()).ends_with("-000000000000/hard"));
    }

    #[test]
    fn test_list_url_with_deleted() {
        let mut query = PageQuery::default();
        query.include_deleted = true;
        assert_eq!(
            service().list_url(&query).unwrap(),
            "http://localhost:5000/api/stores?pageNumber=1&pageSize=20&includeDeleted=true"
        );
    }
}
