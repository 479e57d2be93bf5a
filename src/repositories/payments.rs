use crate::models::asaas::{Charge, ChargeStatus, Customer, PixQrCode};
use crate::models::payment::{PaymentStatus, PixCharge};

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

pub mod asaas;

/// Outbound port to the payment provider. The production implementation is
/// [`asaas::AsaasApi`]; tests substitute a double.
///
/// Every call creates fresh provider-side records; there is no lookup or
/// reuse. A `find_or_create_customer` keyed on the Telegram user id would be
/// the natural extension point if duplicate customers ever become a problem.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    async fn create_customer(&self, name: &str, tax_id: &str) -> Result<Customer, anyhow::Error>;

    async fn create_charge(
        &self,
        customer_id: &str,
        value: f64,
        due_date: &str,
        description: &str,
    ) -> Result<Charge, anyhow::Error>;

    async fn pix_qr_code(&self, charge_id: &str) -> Result<PixQrCode, anyhow::Error>;

    async fn charge_status(&self, charge_id: &str) -> Result<ChargeStatus, anyhow::Error>;
}

pub struct PaymentRepository {
    provider: Arc<dyn PaymentProvider>,
}

impl PaymentRepository {
    pub fn new(provider: Arc<dyn PaymentProvider>) -> Self {
        PaymentRepository { provider }
    }

    /// Runs the three provider calls in order: customer, charge, QR render.
    /// Any failure aborts the flow; a customer created before a failed charge
    /// is left behind on the provider side.
    pub async fn create_pix_payment(
        &self,
        name: &str,
        tax_id: &str,
        value: f64,
        description: &str,
    ) -> Result<PixCharge, anyhow::Error> {
        let customer = self.provider.create_customer(name, tax_id).await?;

        let due_date = (Utc::now() + chrono::Duration::days(1))
            .format("%Y-%m-%d")
            .to_string();
        let charge = self
            .provider
            .create_charge(&customer.id, value, &due_date, description)
            .await?;

        let qr_code = self.provider.pix_qr_code(&charge.id).await?;

        Ok(PixCharge {
            payment_id: charge.id,
            qr_code: qr_code.encoded_image,
            pix_code: qr_code.payload,
        })
    }

    pub async fn payment_status(&self, payment_id: &str) -> Result<PaymentStatus, anyhow::Error> {
        let charge_status = self.provider.charge_status(payment_id).await?;

        Ok(PaymentStatus::from_provider(&charge_status.status))
    }
}
