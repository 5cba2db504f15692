//! Customer and Order record types
//!
//! These are both the wire types (serde) and the row types (sqlx).
//! `id` is `None` until the store assigns one; request bodies may omit it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A customer record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Customer {
    /// Store-assigned identifier, immutable once set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    /// Set by the store on first insert, never updated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// An order record
///
/// `customer_id` is a logical reference only; the store does not enforce
/// a foreign key to `customers_tb`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    /// Store-assigned identifier, immutable once set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub customer_id: Option<i64>,
    pub product_name: String,
    pub quantity: i32,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn customer_body_without_id_deserializes() {
        let customer: Customer =
            serde_json::from_str(r#"{"name": "Ada", "email": "ada@example.com"}"#).unwrap();
        assert_eq!(customer.id, None);
        assert_eq!(customer.name, "Ada");
        assert_eq!(customer.email, "ada@example.com");
    }

    #[test]
    fn customer_without_id_serializes_without_id_field() {
        let customer = Customer {
            id: None,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            created_at: None,
        };
        let json = serde_json::to_value(&customer).unwrap();
        assert!(json.get("id").is_none());
    }

    #[test]
    fn order_body_deserializes_with_numeric_price() {
        let order: Order = serde_json::from_str(
            r#"{"customer_id": 7, "product_name": "Widget", "quantity": 3, "price": 19.99}"#,
        )
        .unwrap();
        assert_eq!(order.id, None);
        assert_eq!(order.customer_id, Some(7));
        assert_eq!(order.quantity, 3);
        assert_eq!(order.price, Decimal::new(1999, 2));
    }

    #[test]
    fn order_without_customer_deserializes() {
        let order: Order =
            serde_json::from_str(r#"{"product_name": "Widget", "quantity": 1, "price": 5}"#)
                .unwrap();
        assert_eq!(order.customer_id, None);
    }
}
