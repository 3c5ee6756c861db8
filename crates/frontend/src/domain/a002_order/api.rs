use crate::shared::api_client::{ApiClient, Method};
use crate::shared::api_error::ApiError;
use contracts::domain::a002_order::{ConfirmOrderQuery, OrderDto, OrderIdQuery, UpdateOrderStatusQuery};
use contracts::enums::OrderStatus;
use uuid::Uuid;

pub const ALL_ORDERS_PATH: &str = "/Order/getAllOrder";
pub const ORDER_BY_ID_PATH: &str = "/Order/getOrderById";
pub const CONFIRM_ORDER_PATH: &str = "/Order/confirmOrderStatus";
pub const UPDATE_STATUS_PATH: &str = "/Order/updateOrderStatus";

#[derive(Clone, Copy)]
pub struct OrderService {
    client: ApiClient,
}

impl OrderService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn get_url(&self, order_id: Uuid) -> Result<String, ApiError> {
        self.client
            .url_with_query(ORDER_BY_ID_PATH, &OrderIdQuery { order_id })
    }

    pub fn confirm_url(&self, order_id: Uuid, is_confirmed: bool) -> Result<String, ApiError> {
        let query = ConfirmOrderQuery {
            order_id,
            is_confirmed,
        };
        self.client.url_with_query(CONFIRM_ORDER_PATH, &query)
    }

    pub fn update_status_url(&self, order_id: Uuid, status: OrderStatus) -> Result<String, ApiError> {
        let query = UpdateOrderStatusQuery { order_id, status };
        self.client.url_with_query(UPDATE_STATUS_PATH, &query)
    }

    /// Whole list; filtering and paging happen in the page.
    pub async fn get_all(&self) -> Result<Vec<OrderDto>, ApiError> {
        self.client.get(&self.client.url(ALL_ORDERS_PATH)).await
    }

    pub async fn get(&self, order_id: Uuid) -> Result<OrderDto, ApiError> {
        self.client.get(&self.get_url(order_id)?).await
    }

    pub async fn confirm(&self, order_id: Uuid, is_confirmed: bool) -> Result<(), ApiError> {
        let url = self.confirm_url(order_id, is_confirmed)?;
        self.client.send(Method::Put, &url).await
    }

    /// Any status may be written; the server decides what is legal.
    pub async fn update_status(&self, order_id: Uuid, status: OrderStatus) -> Result<(), ApiError> {
        let url = self.update_status_url(order_id, status)?;
        self.client.send(Method::Put, &url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "0b9f6a52-1d7e-4c35-8f0a-3e2d1c4b5a69";

    fn service() -> OrderService {
        OrderService::new(ApiClient::new("http://localhost:5000", 1000))
    }

    fn order_id() -> Uuid {
        Uuid::parse_str(ID).unwrap()
    }

    #[test]
    fn test_get_by_id_url() {
        let url = service().get_url(order_id()).unwrap();
        assert_eq!(url, format!("http://localhost:5000/Order/getOrderById?OrderId={}", ID));
    }

    #[test]
    fn test_confirm_url() {
        let url = service().confirm_url(order_id(), false).unwrap();
        assert_eq!(
            url,
            format!("http://localhost:5000/Order/confirmOrderStatus?OrderId={}&IsConfirmed=false", ID)
        );
    }

    #[test]
    fn test_update_status_url() {
        let url = service()
            .update_status_url(order_id(), OrderStatus::Shipped)
            .unwrap();
        assert_eq!(
            url,
            format!("http://localhost:5000/Order/updateOrderStatus?OrderId={}&Status=Shipped", ID)
        );
    }
}
