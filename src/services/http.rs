use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tokio::sync::{mpsc, oneshot};
use tower_http::trace::TraceLayer;

use super::payments::PaymentServiceRequest;
use super::ServiceError;
use crate::models::payment::NewPayment;

#[derive(Clone)]
struct AppState {
    payment_channel: mpsc::Sender<PaymentServiceRequest>,
}

fn error_response(error: ServiceError) -> (StatusCode, Json<serde_json::Value>) {
    let status = match error {
        ServiceError::Validation(_) | ServiceError::Upstream(_) => StatusCode::BAD_REQUEST,
        ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(json!({ "detail": error.to_string() })))
}

async fn create_payment(
    State(state): State<AppState>,
    Json(req): Json<NewPayment>,
) -> impl IntoResponse {
    let (response_tx, response_rx) = oneshot::channel();

    let send_result = state
        .payment_channel
        .send(PaymentServiceRequest::CreatePayment {
            request: req,
            response: response_tx,
        })
        .await;
    if let Err(e) = send_result {
        return error_response(ServiceError::Internal(e.to_string()));
    }

    match response_rx.await {
        Ok(Ok(charge)) => (StatusCode::OK, Json(json!(charge))),
        Ok(Err(service_error)) => error_response(service_error),
        Err(e) => error_response(ServiceError::Internal(e.to_string())),
    }
}

async fn payment_status(
    State(state): State<AppState>,
    Path(payment_id): Path<String>,
) -> impl IntoResponse {
    let (response_tx, response_rx) = oneshot::channel();

    let send_result = state
        .payment_channel
        .send(PaymentServiceRequest::PaymentStatus {
            payment_id,
            response: response_tx,
        })
        .await;
    if let Err(e) = send_result {
        return error_response(ServiceError::Internal(e.to_string()));
    }

    match response_rx.await {
        Ok(Ok(status)) => (StatusCode::OK, Json(json!({ "status": status }))),
        Ok(Err(service_error)) => error_response(service_error),
        Err(e) => error_response(ServiceError::Internal(e.to_string())),
    }
}

pub fn router(payment_channel: mpsc::Sender<PaymentServiceRequest>) -> Router {
    let app_state = AppState { payment_channel };

    Router::new()
        .route("/payments/create", post(create_payment))
        .route("/payments/status/{payment_id}", get(payment_status))
        .route("/health", get(|| async { "OK" }))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}

pub async fn start_http_server(
    payment_channel: mpsc::Sender<PaymentServiceRequest>,
    listen: &str,
) -> Result<(), anyhow::Error> {
    let app = router(payment_channel);

    let listener = tokio::net::TcpListener::bind(listen).await?;
    log::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
