use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::bail;
use async_trait::async_trait;

use pix_gateway::models::asaas::{Charge, ChargeStatus, Customer, PixQrCode};
use pix_gateway::repositories::payments::PaymentProvider;

/// Provider double with call counters. Returns fixed ids and QR data unless
/// told to fail at a given step.
pub struct MockProvider {
    pub customer_calls: AtomicUsize,
    pub charge_calls: AtomicUsize,
    pub qr_calls: AtomicUsize,
    pub status_calls: AtomicUsize,
    fail_customer: bool,
    fail_charge: bool,
    status: String,
}

impl MockProvider {
    pub fn new() -> Self {
        MockProvider {
            customer_calls: AtomicUsize::new(0),
            charge_calls: AtomicUsize::new(0),
            qr_calls: AtomicUsize::new(0),
            status_calls: AtomicUsize::new(0),
            fail_customer: false,
            fail_charge: false,
            status: "PENDING".to_string(),
        }
    }

    pub fn with_status(status: &str) -> Self {
        MockProvider {
            status: status.to_string(),
            ..Self::new()
        }
    }

    pub fn failing_customer() -> Self {
        MockProvider {
            fail_customer: true,
            ..Self::new()
        }
    }

    pub fn failing_charge() -> Self {
        MockProvider {
            fail_charge: true,
            ..Self::new()
        }
    }
}

#[async_trait]
impl PaymentProvider for MockProvider {
    async fn create_customer(&self, _name: &str, _tax_id: &str) -> Result<Customer, anyhow::Error> {
        self.customer_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_customer {
            bail!("{}", r#"{"errors":[{"code":"invalid_cpfCnpj","description":"CPF invalido"}]}"#);
        }

        Ok(Customer {
            id: "cus_1".to_string(),
        })
    }

    async fn create_charge(
        &self,
        _customer_id: &str,
        _value: f64,
        _due_date: &str,
        _description: &str,
    ) -> Result<Charge, anyhow::Error> {
        self.charge_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_charge {
            bail!("{}", r#"{"errors":[{"code":"invalid_value","description":"Cobranca recusada"}]}"#);
        }

        Ok(Charge {
            id: "pay_1".to_string(),
        })
    }

    async fn pix_qr_code(&self, _charge_id: &str) -> Result<PixQrCode, anyhow::Error> {
        self.qr_calls.fetch_add(1, Ordering::SeqCst);

        Ok(PixQrCode {
            encoded_image: "AAA".to_string(),
            payload: "000201...".to_string(),
        })
    }

    async fn charge_status(&self, _charge_id: &str) -> Result<ChargeStatus, anyhow::Error> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);

        Ok(ChargeStatus {
            status: self.status.clone(),
        })
    }
}
