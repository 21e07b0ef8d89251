use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body accepted by every write route. All fields are optional and unchecked.
#[derive(ToSchema, Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BankIdRequest {
    /// Personal identity number, e.g. `YYYYMMDD-NNNN`.
    pub personal_number: Option<String>,
    pub order_ref: Option<String>,
    pub session_id: Option<String>,
    /// `bankid-app`, `bankid-other` or `bankid-qr`; not enforced.
    pub auth_method: Option<String>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Complete,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BankIdResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
}

impl BankIdResponse {
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            order_ref: None,
            status: None,
            qr_code: None,
            session_id: None,
            data: None,
        }
    }

    #[must_use]
    pub fn with_order_ref(mut self, order_ref: impl Into<String>) -> Self {
        self.order_ref = Some(order_ref.into());
        self
    }

    #[must_use]
    pub const fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn with_qr_code(mut self, qr_code: impl Into<String>) -> Self {
        self.qr_code = Some(qr_code.into());
        self
    }

    #[must_use]
    pub fn with_session_id(mut self, session_id: Option<String>) -> Self {
        self.session_id = session_id;
        self
    }
}
