//! HTTP transport for the Meeting Notes service.

mod client;

pub use client::ReqwestHttpClient;
