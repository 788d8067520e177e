//! REST routes exposed by the customers backend.

use crate::domain::CustomerId;

pub const LIST_CUSTOMERS_PATH: &str = "/customers/getAll";
pub const CREATE_CUSTOMER_PATH: &str = "/customers/create";

pub fn update_customer_path(id: CustomerId) -> String {
    format!("/customers/update/{}", id.0)
}

pub fn delete_customer_path(id: CustomerId) -> String {
    format!("/customers/delete/{}", id.0)
}
