//! Core of the Hongik study timer client.
//!
//! Screen state lives in [`reactor::Store`]s driven by the reactors in
//! [`screens`]. Side effects go through the ports in [`services`], and API
//! calls are built by [`api::router`].

pub mod api;
pub mod config;
pub mod reactor;
pub mod screens;
pub mod services;
pub mod session;
pub mod telemetry;
pub mod validation;
