use super::handler::FreteService;
use crate::server::pricing::{PriceSource, ThreadRandom};
use fretes_tonic_core::proto::{CalculaFreteRequest, fretes_service_server::FretesService};
use fretes_tonic_core::types::VALOR_LIMIT;
use std::sync::atomic::{AtomicUsize, Ordering};
use tonic::{Code, Request};

/// Always quotes the same price.
struct FixedPrice(f64);

impl PriceSource for FixedPrice {
    fn sample(&self) -> f64 {
        self.0
    }
}

/// Replays a fixed script of draws; panics if the handler draws more often
/// than scripted.
struct ScriptedPrice {
    draws: Vec<f64>,
    next: AtomicUsize,
}

impl ScriptedPrice {
    fn new(draws: &[f64]) -> Self {
        Self {
            draws: draws.to_vec(),
            next: AtomicUsize::new(0),
        }
    }
}

impl PriceSource for ScriptedPrice {
    fn sample(&self) -> f64 {
        let i = self.next.fetch_add(1, Ordering::Relaxed);
        self.draws[i]
    }
}

fn request(cep: &str) -> Request<CalculaFreteRequest> {
    Request::new(CalculaFreteRequest {
        cep: cep.to_string(),
    })
}

#[tokio::test]
async fn blank_cep_fails_with_invalid_argument() {
    let service = FreteService::new(FixedPrice(1.0));
    for cep in ["", "   "] {
        let status = service.calcula_frete(request(cep)).await.unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);
        assert_eq!(status.message(), "cep deve ser informado");
    }
}

#[tokio::test]
async fn malformed_cep_fails_with_invalid_argument() {
    let service = FreteService::new(FixedPrice(1.0));
    for cep in ["0131-100", "01310100", "abcde-fgh", "01310-1000", "99999-99"] {
        let status = service.calcula_frete(request(cep)).await.unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument, "cep: {cep:?}");
        assert!(status.message().starts_with("cep com formato inválido"));
        assert!(status.message().contains("99999-999"));
    }
}

#[tokio::test]
async fn well_formed_cep_gets_a_quote_in_range() {
    let service = FreteService::new(ThreadRandom);
    let response = service
        .calcula_frete(request("01310-100"))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(response.cep, "01310-100");
    assert!((0.0..VALOR_LIMIT).contains(&response.valor));
}

#[tokio::test]
async fn quote_comes_from_the_second_draw() {
    // First draw feeds the guard probe, second draw is the quote.
    let service = FreteService::new(ScriptedPrice::new(&[10.0, 42.5]));
    let response = service
        .calcula_frete(request("01310-100"))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(response.valor, 42.5);
}

#[tokio::test]
async fn tripped_guard_never_reaches_the_caller() {
    // A probe above the guard limit still answers normally, with the
    // second draw as the quote.
    let service = FreteService::new(ScriptedPrice::new(&[139.9, 7.0]));
    let response = service
        .calcula_frete(request("01310-100"))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(response.valor, 7.0);
}

#[tokio::test]
async fn restricted_suffix_still_answers_normally() {
    // Pins the legacy fall-through: a CEP ending in the restricted suffix
    // is flagged internally but the caller sees a plain success.
    let service = FreteService::new(FixedPrice(55.0));
    let response = service
        .calcula_frete(request("00000-333"))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(response.cep, "00000-333");
    assert_eq!(response.valor, 55.0);
}

#[tokio::test]
async fn repeated_quotes_stay_in_range() {
    // Quotes are random; successive calls may disagree and only the range
    // is guaranteed.
    let service = FreteService::new(ThreadRandom);
    for _ in 0..16 {
        let response = service
            .calcula_frete(request("30130-010"))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(response.cep, "30130-010");
        assert!((0.0..VALOR_LIMIT).contains(&response.valor));
    }
}
