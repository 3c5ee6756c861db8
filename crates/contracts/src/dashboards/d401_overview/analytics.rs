use crate::dashboards::chart::{count_by, ChartSlice};
use crate::domain::a002_order::OrderDto;
use crate::domain::a006_delivery::PaymentRequestWithDelivery;
use crate::domain::a007_billing::BillingStatement;
use crate::enums::{BillingStatus, DeliveryStatus, OrderStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BillingTotals {
    pub gross_sales: f64,
    pub commission_amount: f64,
    pub net_payout: f64,
    pub overdue_count: usize,
}

pub fn order_status_counts(orders: &[OrderDto]) -> Vec<ChartSlice> {
    count_by(
        orders,
        &OrderStatus::all(),
        |s| s.display_name().to_string(),
        |o| o.status,
    )
}

/// Sum of order totals, cancelled and returned orders excluded.
pub fn revenue_total(orders: &[OrderDto]) -> f64 {
    orders
        .iter()
        .filter(|o| !o.status.is_revenue_excluded())
        .map(|o| o.total_amount)
        .sum()
}

pub fn unconfirmed_orders(orders: &[OrderDto]) -> usize {
    orders
        .iter()
        .filter(|o| !o.is_confirmed)
        .count()
}

pub fn delivery_status_counts(rows: &[PaymentRequestWithDelivery]) -> Vec<ChartSlice> {
    count_by(
        rows,
        &DeliveryStatus::all(),
        |s| s.display_name().to_string(),
        |r| r.delivery_status(),
    )
}

/// COD money not yet collected.
pub fn cod_outstanding(rows: &[PaymentRequestWithDelivery]) -> f64 {
    rows.iter()
        .filter(|r| r.is_cod_outstanding())
        .map(|r| r.amount)
        .sum()
}

pub fn billing_totals(statements: &[BillingStatement]) -> BillingTotals {
    statements
        .iter()
        .fold(BillingTotals::default(), |mut acc, s| {
            acc.gross_sales += s.gross_sales;
            acc.commission_amount += s.commission_amount;
            acc.net_payout += s.net_payout;
            if s.status == BillingStatus::Overdue {
                acc.overdue_count += 1;
            }
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(status: &str, total: f64, confirmed: bool) -> OrderDto {
        serde_json::from_value(json!({
            "id": uuid::Uuid::new_v4(),
            "orderNumber": "ORD",
            "customerName": "C",
            "totalAmount": total,
            "status": status,
            "isConfirmed": confirmed,
            "paymentMethod": "Online",
            "createdAt": "2025-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    fn delivery(method: &str, status: &str, amount: f64, delivery_status: Option<&str>) -> PaymentRequestWithDelivery {
        let delivery = delivery_status.map(|s| {
            let is_delivered = s == "Delivered";
            json!({
                "companyInfoId": uuid::Uuid::new_v4(),
                "companyName": "FastShip",
                "deliveryStatus": s,
                "isDelivered": is_delivered
            })
        });
        serde_json::from_value(json!({
            "paymentRequestId": uuid::Uuid::new_v4(),
            "orderId": uuid::Uuid::new_v4(),
            "customerName": "C",
            "amount": amount,
            "paymentMethod": method,
            "paymentStatus": status,
            "delivery": delivery,
            "createdAt": "2025-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_order_metrics() {
        let orders = vec![
            order("Pending", 10.0, false),
            order("Delivered", 20.0, true),
            order("Cancelled", 100.0, false),
            order("Pending", 5.0, true),
        ];
        assert_eq!(revenue_total(&orders), 35.0);
        assert_eq!(unconfirmed_orders(&orders), 2);
        assert_eq!(
            order_status_counts(&orders),
            vec![
                ChartSlice::new("Pending", 2.0),
                ChartSlice::new("Delivered", 1.0),
                ChartSlice::new("Cancelled", 1.0),
            ]
        );
    }

    #[test]
    fn test_unconfirmed_orders_count_every_status() {
        let orders = vec![
            order("Cancelled", 10.0, false),
            order("Returned", 20.0, false),
            order("Shipped", 30.0, true),
        ];
        assert_eq!(unconfirmed_orders(&orders), 2);
        assert_eq!(revenue_total(&orders), 30.0);
    }

    #[test]
    fn test_delivery_metrics() {
        let rows = vec![
            delivery("COD", "CodPending", 50.0, None),
            delivery("COD", "CodCollected", 70.0, Some("Delivered")),
            delivery("Online", "Paid", 30.0, Some("InTransit")),
            delivery("COD", "CodPending", 25.0, Some("InTransit")),
        ];
        assert_eq!(cod_outstanding(&rows), 75.0);
        assert_eq!(
            delivery_status_counts(&rows),
            vec![
                ChartSlice::new("Pending", 1.0),
                ChartSlice::new("In transit", 2.0),
                ChartSlice::new("Delivered", 1.0),
            ]
        );
    }

    #[test]
    fn test_billing_totals() {
        let statements: Vec<BillingStatement> = ["Paid", "Overdue", "Overdue"]
            .iter()
            .map(|status| {
                serde_json::from_value(json!({
                    "id": uuid::Uuid::new_v4(),
                    "storeId": uuid::Uuid::new_v4(),
                    "storeName": "S",
                    "periodStart": "2025-01-01",
                    "periodEnd": "2025-01-31",
                    "grossSales": 100.0,
                    "commissionRate": 10.0,
                    "commissionAmount": 10.0,
                    "netPayout": 90.0,
                    "status": status
                }))
                .unwrap()
            })
            .collect();
        let t = billing_totals(&statements);
        assert_eq!(t.gross_sales, 300.0);
        assert_eq!(t.commission_amount, 30.0);
        assert_eq!(t.net_payout, 270.0);
        assert_eq!(t.overdue_count, 2);
        assert_eq!(billing_totals(&[]), BillingTotals::default());
    }
}
