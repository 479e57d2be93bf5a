pub mod asaas;
pub mod payment;
