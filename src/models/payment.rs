use serde::{Deserialize, Serialize};

#[derive(Clone, Deserialize)]
pub struct NewPayment {
    #[serde(default)]
    pub telegram_user_id: Option<serde_json::Value>,
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewPayment {
    /// Display name sent to the provider. The bot may send the Telegram user
    /// id as a number or a string.
    pub fn requester_name(&self) -> String {
        let id = match &self.telegram_user_id {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Number(n)) => n.to_string(),
            _ => "desconhecido".to_string(),
        };

        format!("Telegram User {}", id)
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct PixCharge {
    pub payment_id: String,
    pub qr_code: String,
    pub pix_code: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
}

impl PaymentStatus {
    /// Asaas reports a charge as settled with RECEIVED or CONFIRMED; every
    /// other value, known or not, reads as pending.
    pub fn from_provider(status: &str) -> Self {
        match status {
            "RECEIVED" | "CONFIRMED" => PaymentStatus::Paid,
            _ => PaymentStatus::Pending,
        }
    }
}
