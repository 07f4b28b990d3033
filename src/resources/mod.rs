//! `Client` methods, one module per API resource.

mod account;
mod jobs;
mod media;
mod reports;
