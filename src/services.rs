use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::settings::Settings;

pub mod http;
pub mod payments;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Upstream(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

#[async_trait]
pub trait RequestHandler<T>: Send + Sync + 'static
where
    T: Send + 'static,
{
    async fn handle_request(&self, request: T);
}

#[async_trait]
pub trait Service<T, H>: Send + Sync + 'static
where
    T: Send + 'static,
    H: RequestHandler<T> + Clone + Send,
{
    async fn run(&mut self, handler: H, receiver: &mut mpsc::Receiver<T>) {
        while let Some(request) = receiver.recv().await {
            let handler = handler.clone();

            tokio::spawn(async move {
                handler.handle_request(request).await;
            });
        }
    }
}

pub async fn start_services(settings: Settings, api_key: String) -> Result<(), anyhow::Error> {
    let (payment_tx, mut payment_rx) = mpsc::channel(512);

    log::info!("Starting payment service.");
    let mut payment_service = payments::PaymentService::new();
    let handler = payments::PaymentRequestHandler::new(
        api_key,
        settings.asaas.url,
        Duration::from_secs(settings.asaas.timeout_secs),
    )?;
    tokio::spawn(async move {
        payment_service.run(handler, &mut payment_rx).await;
    });

    log::info!("Starting HTTP service.");
    http::start_http_server(payment_tx, &settings.server.listen).await
}
