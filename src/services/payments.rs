use super::RequestHandler;
use super::Service;
use super::ServiceError;

use crate::models::payment::{NewPayment, PaymentStatus, PixCharge};
use crate::repositories::payments::asaas::AsaasApi;
use crate::repositories::payments::{PaymentProvider, PaymentRepository};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::oneshot;

const MINIMUM_CHARGE_VALUE: f64 = 5.0;
const DEFAULT_DESCRIPTION: &str = "Pagamento via Telegram";

pub enum PaymentServiceRequest {
    CreatePayment {
        request: NewPayment,
        response: oneshot::Sender<Result<PixCharge, ServiceError>>,
    },
    PaymentStatus {
        payment_id: String,
        response: oneshot::Sender<Result<PaymentStatus, ServiceError>>,
    },
}

pub struct PaymentService;

impl PaymentService {
    pub fn new() -> Self {
        PaymentService
    }
}

#[async_trait]
impl Service<PaymentServiceRequest, PaymentRequestHandler> for PaymentService {}

#[derive(Clone)]
pub struct PaymentRequestHandler {
    repository: Arc<PaymentRepository>,
}

impl PaymentRequestHandler {
    pub fn new(api_key: String, url: String, timeout: Duration) -> Result<Self, anyhow::Error> {
        let api = AsaasApi::new(api_key, url, timeout)?;

        Ok(Self::with_provider(Arc::new(api)))
    }

    pub fn with_provider(provider: Arc<dyn PaymentProvider>) -> Self {
        let repository = Arc::new(PaymentRepository::new(provider));

        PaymentRequestHandler { repository }
    }

    /// Validates the request, then drives the customer/charge/QR sequence.
    /// Validation failures never reach the provider.
    pub async fn create_payment(&self, request: NewPayment) -> Result<PixCharge, ServiceError> {
        let tax_id = match request.tax_id.as_deref() {
            Some(t) if !t.trim().is_empty() => t.to_string(),
            _ => {
                return Err(ServiceError::Validation(
                    "tax_id is required".to_string(),
                ))
            }
        };

        let value = match request.value {
            Some(v) if v.is_finite() && v >= MINIMUM_CHARGE_VALUE => v,
            Some(_) => {
                return Err(ServiceError::Validation(format!(
                    "value must be at least {:.2}",
                    MINIMUM_CHARGE_VALUE
                )))
            }
            None => return Err(ServiceError::Validation("value is required".to_string())),
        };

        let description = request
            .description
            .clone()
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());
        let name = request.requester_name();

        log::info!("Creating PIX charge: value={:.2}", value);
        let charge = self
            .repository
            .create_pix_payment(&name, &tax_id, value, &description)
            .await
            .map_err(|e| ServiceError::Upstream(e.to_string()))?;
        log::info!("PIX charge created: id={}", charge.payment_id);

        Ok(charge)
    }

    pub async fn payment_status(&self, payment_id: &str) -> Result<PaymentStatus, ServiceError> {
        log::info!("Fetching payment status: id={}", payment_id);

        self.repository
            .payment_status(payment_id)
            .await
            .map_err(|e| ServiceError::Upstream(e.to_string()))
    }
}

#[async_trait]
impl RequestHandler<PaymentServiceRequest> for PaymentRequestHandler {
    async fn handle_request(&self, request: PaymentServiceRequest) {
        match request {
            PaymentServiceRequest::CreatePayment { request, response } => {
                let result = self.create_payment(request).await;
                let _ = response.send(result);
            }
            PaymentServiceRequest::PaymentStatus {
                payment_id,
                response,
            } => {
                let result = self.payment_status(&payment_id).await;
                let _ = response.send(result);
            }
        }
    }
}
