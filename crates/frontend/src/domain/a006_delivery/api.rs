use crate::shared::api_client::{ApiClient, Method};
use crate::shared::api_error::ApiError;
use contracts::domain::a006_delivery::{
    AssignDeliveryQuery, CollectCodPaymentQuery, DeliveredQuery, DeliveryCompany,
    PaymentRequestWithDelivery,
};
use contracts::enums::DeliveryStatus;
use uuid::Uuid;

pub const PAYMENT_REQUESTS_PATH: &str = "/delivery/getAllPaymentRequestWithDelivery";
pub const COMPANIES_PATH: &str = "/delivery/companies";
pub const ASSIGN_PATH: &str = "/delivery/assign";
pub const DELIVERED_PATH: &str = "/delivery/delivered";
pub const COLLECT_COD_PATH: &str = "/payment/callback/cod/collect-payment";

#[derive(Clone, Copy)]
pub struct DeliveryService {
    client: ApiClient,
}

impl DeliveryService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn assign_url(&self, payment_request_id: Uuid, company_info_id: Uuid) -> Result<String, ApiError> {
        let query = AssignDeliveryQuery {
            payment_request_id,
            company_info_id,
        };
        self.client.url_with_query(ASSIGN_PATH, &query)
    }

    pub fn mark_delivered_url(
        &self,
        payment_request_id: Uuid,
        company_info_id: Uuid,
        is_delivered: bool,
    ) -> Result<String, ApiError> {
        let query = DeliveredQuery {
            payment_request_id,
            company_info_id,
            is_delivered,
        };
        self.client.url_with_query(DELIVERED_PATH, &query)
    }

    pub fn collect_cod_url(
        &self,
        payment_request_id: Uuid,
        delivery_status: DeliveryStatus,
        notes: String,
        collected_amount: f64,
    ) -> Result<String, ApiError> {
        let query = CollectCodPaymentQuery {
            payment_request_id,
            delivery_status,
            notes,
            collected_amount,
        };
        self.client.url_with_query(COLLECT_COD_PATH, &query)
    }

    pub async fn list(&self) -> Result<Vec<PaymentRequestWithDelivery>, ApiError> {
        self.client.get(&self.client.url(PAYMENT_REQUESTS_PATH)).await
    }

    pub async fn companies(&self) -> Result<Vec<DeliveryCompany>, ApiError> {
        self.client.get(&self.client.url(COMPANIES_PATH)).await
    }

    pub async fn assign(&self, payment_request_id: Uuid, company_info_id: Uuid) -> Result<(), ApiError> {
        let url = self.assign_url(payment_request_id, company_info_id)?;
        self.client.send(Method::Post, &url).await
    }

    pub async fn mark_delivered(
        &self,
        payment_request_id: Uuid,
        company_info_id: Uuid,
        is_delivered: bool,
    ) -> Result<(), ApiError> {
        let url = self.mark_delivered_url(payment_request_id, company_info_id, is_delivered)?;
        self.client.send(Method::Post, &url).await
    }

    pub async fn collect_cod(
        &self,
        payment_request_id: Uuid,
        delivery_status: DeliveryStatus,
        notes: String,
        collected_amount: f64,
    ) -> Result<(), ApiError> {
        let url = self.collect_cod_url(payment_request_id, delivery_status, notes, collected_amount)?;
        self.client.send(Method::Post, &url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PR: &str = "2c4e6a8b-0d1f-4a3c-8e5b-7d9f1a2c3e4f";
    const CO: &str = "9e8d7c6b-5a4f-4e3d-9c2b-1a0f9e8d7c6b";

    fn service() -> DeliveryService {
        DeliveryService::new(ApiClient::new("http://localhost:5000", 1000))
    }

    fn ids() -> (Uuid, Uuid) {
        (Uuid::parse_str(PR).unwrap(), Uuid::parse_str(CO).unwrap())
    }

    #[test]
    fn test_assign_url() {
        let (pr, co) = ids();
        let url = service().assign_url(pr, co).unwrap();
        assert_eq!(
            url,
            format!(
                "http://localhost:5000/delivery/assign?PaymentRequestId={}&CompanyInfoId={}",
                PR, CO
            )
        );
    }

    #[test]
    fn test_delivered_url() {
        let (pr, co) = ids();
        let url = service().mark_delivered_url(pr, co, true).unwrap();
        assert!(url.starts_with("http://localhost:5000/delivery/delivered?"));
        assert!(url.ends_with("&IsDelivered=true"));
    }

    #[test]
    fn test_collect_cod_url() {
        let (pr, _) = ids();
        let url = service()
            .collect_cod_url(pr, DeliveryStatus::Delivered, String::new(), 85.5)
            .unwrap();
        assert_eq!(
            url,
            format!(
                "http://localhost:5000/payment/callback/cod/collect-payment?PaymentRequestId={}&DeliveryStatus=Delivered&Notes=&CollectedAmount=85.5",
                PR
            )
        );
    }
}
