use crate::shared::api_client::{ApiClient, Method};
use crate::shared::api_error::ApiError;
use contracts::domain::a007_billing::{BillingQuery, BillingStatement};
use contracts::shared::PagedResult;
use uuid::Uuid;

pub const BILLING_PATH: &str = "/api/billing";

#[derive(Clone, Copy)]
pub struct BillingService {
    client: ApiClient,
}

impl BillingService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn list_url(&self, query: &BillingQuery) -> Result<String, ApiError> {
        self.client.url_with_query(BILLING_PATH, query)
    }

    pub fn mark_paid_url(&self, id: Uuid) -> String {
        self.client
            .url(&format!("{}/{}/mark-paid", BILLING_PATH, id))
    }

    pub async fn list(&self, query: &BillingQuery) -> Result<PagedResult<BillingStatement>, ApiError> {
        self.client.get(&self.list_url(query)?).await
    }

    pub async fn mark_paid(&self, id: Uuid) -> Result<(), ApiError> {
        self.client.send(Method::Put, &self.mark_paid_url(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::BillingStatus;

    fn service() -> BillingService {
        BillingService::new(ApiClient::new("http://localhost:5000", 1000))
    }

    #[test]
    fn test_list_url_with_status() {
        let query = BillingQuery {
            status: Some(BillingStatus::Overdue),
            ..BillingQuery::default()
        };
        assert_eq!(
            service().list_url(&query).unwrap(),
            "http://localhost:5000/api/billing?pageNumber=1&pageSize=20&status=Overdue"
        );
    }

    #[test]
    fn test_mark_paid_url() {
        assert_eq!(
            service().mark_paid_url(Uuid::nil()),
            "http://localhost:5000/api/billing/00000000-0000-0000-0000-000000000000/mark-paid"
        );
    }
}
