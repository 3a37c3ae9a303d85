// 👤 Customer Entity - Bank customer contact record

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Caller-supplied identifier (e.g. "cust-001")
    pub id: String,

    /// Full name
    pub name: String,

    /// Email address
    pub email: String,

    /// Phone string, any format (e.g. "(555) 123-4567")
    pub phone: String,

    /// Customer-facing identifier (e.g. "CUST-10001")
    pub customer_id: String,
}

impl Customer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        customer_id: impl Into<String>,
    ) -> Self {
        Customer {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            customer_id: customer_id.into(),
        }
    }
}
