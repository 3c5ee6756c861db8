use crate::shared::api_client::ApiClient;
use crate::shared::api_error::ApiError;
use crate::shared::record_lifecycle::RecordLifecycle;
use contracts::domain::a001_product::{ProductDto, ProductForm};
use contracts::shared::{PageQuery, PagedResult};
use uuid::Uuid;

pub const PRODUCTS_PATH: &str = "/api/products";

#[derive(Clone, Copy)]
pub struct ProductService {
    client: ApiClient,
}

impl ProductService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn list_url(&self, query: &PageQuery) -> Result<String, ApiError> {
        self.client.url_with_query(PRODUCTS_PATH, query)
    }

    pub fn create_url(&self) -> String {
        self.client.url(PRODUCTS_PATH)
    }

    pub async fn list(&self, query: &PageQuery) -> Result<PagedResult<ProductDto>, ApiError> {
        self.client.get(&self.list_url(query)?).await
    }

    pub async fn get(&self, id: Uuid) -> Result<ProductDto, ApiError> {
        self.client.get(&self.record_url(id)).await
    }

    pub async fn create(&self, form: &ProductForm) -> Result<ProductDto, ApiError> {
        self.client.post_json(&self.create_url(), form).await
    }

    pub async fn update(&self, id: Uuid, form: &ProductForm) -> Result<ProductDto, ApiError> {
        self.client.put_json(&self.record_url(id), form).await
    }
}

impl RecordLifecycle for ProductService {
    const BASE_PATH: &'static str = PRODUCTS_PATH;

    fn client(&self) -> &ApiClient {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "6f1c2a34-58e1-4b8a-9a59-0d2b5e1f7c10";

    fn service() -> ProductService {
        ProductService::new(ApiClient::new("https://shop.test", 1000))
    }

    #[test]
    fn test_record_urls() {
        let id = Uuid::parse_str(ID).unwrap();
        let svc = service();
        assert_eq!(svc.record_url(id), format!("https://shop.test/api/products/{}", ID));
        assert_eq!(
            svc.restore_url(id),
            format!("https://shop.test/api/products/{}/undelete", ID)
        );
        assert_eq!(
            svc.hard_delete_url(id),
            format!("https://shop.test/api/products/{}/hard", ID)
        );
        assert_eq!(svc.create_url(), "https://shop.test/api/products");
    }

    #[test]
    fn test_list_url() {
        let mut query = PageQuery::default();
        query.set_search("desk lamp");
        let url = service().list_url(&query).unwrap();
        assert!(url.starts_with("https://shop.test/api/products?pageNumber=1&pageSize=20&search=desk"));
        assert!(!url.contains("includeDeleted"));
    }
}
