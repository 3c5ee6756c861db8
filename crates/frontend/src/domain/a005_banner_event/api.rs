use crate::shared::api_client::{ApiClient, Method};
use crate::shared::api_error::ApiError;
use crate::shared::record_lifecycle::RecordLifecycle;
use contracts::domain::a001_product::ProductDto;
use contracts::domain::a005_banner_event::{
    AssignProductsRequest, BannerEvent, BannerEventForm, BannerEventQuery, BannerEventStatusQuery,
};
use contracts::enums::BannerEventStatus;
use contracts::shared::PagedResult;
use uuid::Uuid;

pub const BANNER_EVENTS_PATH: &str = "/api/banner-events";

#[derive(Clone, Copy)]
pub struct BannerEventService {
    client: ApiClient,
}

impl BannerEventService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn list_url(&self, query: &BannerEventQuery) -> Result<String, ApiError> {
        self.client.url_with_query(BANNER_EVENTS_PATH, query)
    }

    pub fn set_status_url(&self, id: Uuid, status: BannerEventStatus) -> Result<String, ApiError> {
        let path = format!("{}/status", Self::record_path(id));
        self.client
            .url_with_query(&path, &BannerEventStatusQuery { status })
    }

    /// Read and replace share one URL.
    pub fn products_url(&self, id: Uuid) -> String {
        format!("{}/products", self.record_url(id))
    }

    pub async fn list(&self, query: &BannerEventQuery) -> Result<PagedResult<BannerEvent>, ApiError> {
        self.client.get(&self.list_url(query)?).await
    }

    pub async fn get(&self, id: Uuid) -> Result<BannerEvent, ApiError> {
        self.client.get(&self.record_url(id)).await
    }

    pub async fn create(&self, form: &BannerEventForm) -> Result<BannerEvent, ApiError> {
        self.client
            .post_json(&self.client.url(BANNER_EVENTS_PATH), form)
            .await
    }

    pub async fn update(&self, id: Uuid, form: &BannerEventForm) -> Result<BannerEvent, ApiError> {
        self.client.put_json(&self.record_url(id), form).await
    }

    pub async fn set_status(&self, id: Uuid, status: BannerEventStatus) -> Result<(), ApiError> {
        let url = self.set_status_url(id, status)?;
        self.client.send(Method::Put, &url).await
    }

    pub async fn products(&self, id: Uuid) -> Result<Vec<ProductDto>, ApiError> {
        self.client.get(&self.products_url(id)).await
    }

    /// Replaces the whole product set of the event.
    pub async fn assign_products(&self, id: Uuid, product_ids: Vec<Uuid>) -> Result<(), ApiError> {
        self.client
            .put_json_unit(&self.products_url(id), &AssignProductsRequest { product_ids })
            .await
    }
}

impl RecordLifecycle for BannerEventService {
    const BASE_PATH: &'static str = BANNER_EVENTS_PATH;

    fn client(&self) -> &ApiClient {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::enums::BannerEventType;

    fn service() -> BannerEventService {
        BannerEventService::new(ApiClient::new("http://localhost:5000", 1000))
    }

    #[test]
    fn test_list_url_with_filters() {
        let query = BannerEventQuery {
            status: Some(BannerEventStatus::Active),
            event_type: Some(BannerEventType::FlashSale),
            start_date: NaiveDate::from_ymd_opt(2025, 3, 1),
            ..BannerEventQuery::default()
        };
        let url = service().list_url(&query).unwrap();
        assert_eq!(
            url,
            "http://localhost:5000/api/banner-events?pageNumber=1&pageSize=20&status=Active&eventType=FlashSale&startDate=2025-03-01"
        );
    }

    #[test]
    fn test_status_url() {
        let url = service()
            .set_status_url(Uuid::nil(), BannerEventStatus::Paused)
            .unwrap();
        assert_eq!(
            url,
            "http://localhost:5000/api/banner-events/00000000-0000-0000-0000-000000000000/status?Status=Paused"
        );
    }

    #[test]
    fn test_products_url() {
        assert_eq!(
            service().products_url(Uuid::nil()),
            "http://localhost:5000/api/banner-events/00000000-0000-0000-0000-000000000000/products"
        );
    }
}
