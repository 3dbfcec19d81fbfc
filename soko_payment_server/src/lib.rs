//! # SPG server
//! This module hosts the HTTP surface of the SokoPay gateway. It is responsible for:
//! Accepting initiate-payment and payout requests from the marketplace backend.
//! Accepting asynchronous disbursement callbacks from the mobile-money aggregator.
//! Handing each request to the payment engine and relaying the outcome envelope.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `/api/payments`: Initiate a payment for an order.
//! * `/api/payouts`: Disburse escrowed funds to a seller's mobile-money account.
//! * `/callback/disbursement`: The webhook route for aggregator disbursement notifications.

pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
