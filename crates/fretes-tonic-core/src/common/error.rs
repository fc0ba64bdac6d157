//! Error types for the shipping-quote service.
//!
//! This module defines the central `Error` enum covering every failure the
//! service can report, and implements `From<Error>` for `tonic::Status` so
//! handlers can propagate failures to clients with the right status code and
//! description.
//!
//! ## Error Cases
//! - `MissingCep`: the request carried no CEP.
//! - `MalformedCep`: the CEP does not match the `99999-999` layout.
//! - `PricingGuard`: the pricing probe exceeded the business-rule limit.
//! - `AccessDenied`: the caller may not quote shipping for the selected
//!   address. Its status carries a structured [`proto::ErrorDetails`] payload
//!   in the `grpc-status-details-bin` trailer.

use super::proto;
use super::types::ACCESS_DENIED_DETAIL_CODE;
use bytes::Bytes;
use prost::Message;
use tonic::{Code, Status};

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for the shipping-quote service.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// The request carried no CEP.
    #[error("cep deve ser informado")]
    MissingCep,

    /// The CEP does not match the `99999-999` layout.
    #[error("cep com formato inválido")]
    MalformedCep,

    /// The pricing probe exceeded the business-rule limit.
    #[error("erro inesperado ao executar logica de negócio")]
    PricingGuard,

    /// The caller may not quote shipping for the selected address.
    #[error("usuário sem acesso ao recurso selecionado")]
    AccessDenied,
}

impl From<Error> for Status {
    fn from(err: Error) -> Self {
        match err {
            Error::MissingCep => Status::invalid_argument("cep deve ser informado"),
            // The second line carries the accepted layout, rendered the way
            // augmented gRPC descriptions reach clients.
            Error::MalformedCep => Status::invalid_argument(
                "cep com formato inválido\nO formato aceito é 99999-999",
            ),
            Error::PricingGuard => {
                Status::internal("erro inesperado ao executar logica de negócio")
            }
            Error::AccessDenied => Status::with_details(
                Code::PermissionDenied,
                "usuário sem acesso ao recurso selecionado",
                access_denied_details(),
            ),
        }
    }
}

/// Builds the `grpc-status-details-bin` payload for [`Error::AccessDenied`]:
/// an [`proto::RpcStatus`] wrapping a single [`proto::ErrorDetails`] packed
/// as `google.protobuf.Any`.
fn access_denied_details() -> Bytes {
    let detail = proto::ErrorDetails {
        code: ACCESS_DENIED_DETAIL_CODE,
        message: "Token expirado".to_string(),
    };

    let status = proto::RpcStatus {
        code: Code::PermissionDenied as i32,
        message: "usuário sem acesso ao recurso selecionado".to_string(),
        details: vec![prost_types::Any {
            type_url: "type.googleapis.com/fretes.ErrorDetails".to_string(),
            value: detail.encode_to_vec(),
        }],
    };

    status.encode_to_vec().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cep_maps_to_invalid_argument() {
        let status = Status::from(Error::MissingCep);
        assert_eq!(status.code(), Code::InvalidArgument);
        assert_eq!(status.message(), "cep deve ser informado");
    }

    #[test]
    fn malformed_cep_keeps_the_accepted_layout_hint() {
        let status = Status::from(Error::MalformedCep);
        assert_eq!(status.code(), Code::InvalidArgument);
        assert!(status.message().starts_with("cep com formato inválido"));
        assert!(status.message().contains("99999-999"));
    }

    #[test]
    fn pricing_guard_maps_to_internal() {
        let status = Status::from(Error::PricingGuard);
        assert_eq!(status.code(), Code::Internal);
    }

    #[test]
    fn access_denied_carries_structured_details() {
        let status = Status::from(Error::AccessDenied);
        assert_eq!(status.code(), Code::PermissionDenied);
        assert_eq!(status.message(), "usuário sem acesso ao recurso selecionado");

        let rpc = proto::RpcStatus::decode(status.details()).expect("details decode");
        assert_eq!(rpc.code, Code::PermissionDenied as i32);
        assert_eq!(rpc.details.len(), 1);

        let any = &rpc.details[0];
        assert_eq!(any.type_url, "type.googleapis.com/fretes.ErrorDetails");
        let detail = proto::ErrorDetails::decode(any.value.as_slice()).expect("detail decode");
        assert_eq!(detail.code, ACCESS_DENIED_DETAIL_CODE);
        assert_eq!(detail.message, "Token expirado");
    }
}
