//! Shared contract for the `fretes` shipping-quote service.
//!
//! The `common` module defines everything a client or server needs to agree
//! on before a single RPC is exchanged.
//!
//! ## Submodules
//!
//! - [`cep`] - CEP validation applied to every request.
//! - [`error`] - Centralized service error type and its `tonic::Status`
//!   mapping.
//! - [`types`] - Business constants shared by pricing and access checks.
//! - [`proto`] - Generated tonic bindings for `proto/fretes.proto`.

pub mod cep;
pub mod error;
pub mod types;

pub mod proto {
    tonic::include_proto!("fretes");
    pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("fretes_descriptor");
}

pub use cep::validate_cep;
pub use error::{Error, Result};
