use serde::{Deserialize, Serialize};

#[derive(Clone, Deserialize, Serialize)]
pub struct Customer {
    pub id: String,
}

#[derive(Clone, Deserialize, Serialize)]
pub struct Charge {
    pub id: String,
}

#[derive(Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PixQrCode {
    pub encoded_image: String,
    pub payload: String,
}

#[derive(Clone, Deserialize, Serialize)]
pub struct ChargeStatus {
    pub status: String,
}
