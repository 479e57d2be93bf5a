use crate::models::asaas::{Charge, ChargeStatus, Customer, PixQrCode};

use std::time::Duration;

use anyhow::bail;
use async_trait::async_trait;
use reqwest;
use serde::de::DeserializeOwned;
use serde_json::json;

use super::PaymentProvider;

pub struct AsaasApi {
    api_key: String,
    url: String,
    client: reqwest::Client,
}

impl AsaasApi {
    pub fn new(api_key: String, url: String, timeout: Duration) -> Result<Self, anyhow::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_key,
            url,
            client,
        })
    }

    // Asaas signals errors with a non-2xx status and a JSON body describing
    // the failure; that body is surfaced verbatim to the caller.
    async fn read_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, anyhow::Error> {
        if !response.status().is_success() {
            bail!(response.text().await?);
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl PaymentProvider for AsaasApi {
    async fn create_customer(&self, name: &str, tax_id: &str) -> Result<Customer, anyhow::Error> {
        log::debug!("Asaas: creating customer");
        let payload = json!({
            "name": name,
            "cpfCnpj": tax_id
        });

        let response = self
            .client
            .post(format!("{}/customers", self.url))
            .header("access_token", &self.api_key)
            .json(&payload)
            .send()
            .await?;

        Self::read_response(response).await
    }

    async fn create_charge(
        &self,
        customer_id: &str,
        value: f64,
        due_date: &str,
        description: &str,
    ) -> Result<Charge, anyhow::Error> {
        log::debug!("Asaas: creating PIX charge for customer {}", customer_id);
        let payload = json!({
            "customer": customer_id,
            "billingType": "PIX",
            "value": value,
            "dueDate": due_date,
            "description": description
        });

        let response = self
            .client
            .post(format!("{}/payments", self.url))
            .header("access_token", &self.api_key)
            .json(&payload)
            .send()
            .await?;

        Self::read_response(response).await
    }

    async fn pix_qr_code(&self, charge_id: &str) -> Result<PixQrCode, anyhow::Error> {
        log::debug!("Asaas: fetching QR code for charge {}", charge_id);
        let response = self
            .client
            .get(format!("{}/payments/{}/pixQrCode", self.url, charge_id))
            .header("access_token", &self.api_key)
            .send()
            .await?;

        Self::read_response(response).await
    }

    async fn charge_status(&self, charge_id: &str) -> Result<ChargeStatus, anyhow::Error> {
        log::debug!("Asaas: fetching status for charge {}", charge_id);
        let response = self
            .client
            .get(format!("{}/payments/{}", self.url, charge_id))
            .header("access_token", &self.api_key)
            .send()
            .await?;

        Self::read_response(response).await
    }
}
