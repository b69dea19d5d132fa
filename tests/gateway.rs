mod common;

use std::rc::Rc;

use common::{MockTransport, RecordingViews, Rendered};
use futures::executor::block_on;
use serde_json::{Value, json};
use stock_board_wasm::application::{DataGateway, Endpoint, ErrorPresenter, RequestOptions};
use stock_board_wasm::domain::market::{MarketOverview, StockCode};

fn gateway(base_url: &str) -> (Rc<MockTransport>, Rc<RecordingViews>, DataGateway) {
    let transport = Rc::new(MockTransport::default());
    let views = Rc::new(RecordingViews::default());
    let errors = Rc::new(ErrorPresenter::new(views.clone()));
    let gateway = DataGateway::new(transport.clone(), base_url, errors);
    (transport, views, gateway)
}

#[test]
fn urls_join_base_and_path_with_a_single_slash() {
    let (_, _, gateway) = gateway("https://quotes.example.com/api/");
    assert_eq!(
        gateway.url_for(&Endpoint::Realtime(StockCode::from("000001"))),
        "https://quotes.example.com/api/stocks/000001/realtime/"
    );
    assert_eq!(gateway.url_for(&Endpoint::MarketOverview), "https://quotes.example.com/api/market/");
}

#[test]
fn every_call_reaches_the_transport() {
    let (transport, _, gateway) = gateway("/api");
    transport.respond("/api/market/", json!({}));

    for _ in 0..3 {
        block_on(gateway.request(&Endpoint::MarketOverview, RequestOptions::default())).unwrap();
    }

    assert_eq!(transport.calls(), vec!["/api/market/".to_string(); 3]);
}

#[test]
fn request_returns_the_body_untouched() {
    let (transport, _, gateway) = gateway("/api");
    let body = json!({ "anything": [1, "two", null] });
    transport.respond("/api/market/", body.clone());

    let value: Value = block_on(gateway.request(&Endpoint::MarketOverview, RequestOptions::default())).unwrap();
    assert_eq!(value, body);
}

#[test]
fn surfaced_failures_reach_the_error_modal() {
    let (transport, views, gateway) = gateway("/api");
    transport.fail("/api/market/", 502, "Bad Gateway");

    let error = block_on(gateway.request(&Endpoint::MarketOverview, RequestOptions::default())).unwrap_err();

    assert_eq!(error.status, Some(502));
    assert_eq!(error.message, "HTTP 502: Bad Gateway");
    assert_eq!(views.events(), vec![Rendered::ErrorShown("Request failed: HTTP 502: Bad Gateway".to_string())]);
}

#[test]
fn isolated_failures_stay_out_of_the_modal() {
    let (transport, views, gateway) = gateway("/api");
    transport.fail("/api/stocks/000001/realtime/", 500, "Internal Server Error");

    let result = block_on(gateway.request(&Endpoint::Realtime(StockCode::from("000001")), RequestOptions::isolated()));

    assert_eq!(result.unwrap_err().status, Some(500));
    assert!(views.events().is_empty());
}

#[test]
fn undecodable_bodies_fail_without_a_status() {
    let (transport, views, gateway) = gateway("/api");
    transport.respond("/api/market/", json!({ "total_stocks": "many" }));

    let error = block_on(gateway.fetch::<MarketOverview>(&Endpoint::MarketOverview, RequestOptions::default())).unwrap_err();

    assert_eq!(error.status, None);
    assert!(error.message.contains("/market/"));
    assert_eq!(views.errors_shown().len(), 1);
}

#[test]
fn missing_overview_fields_decode_as_unknown() {
    let (transport, _, gateway) = gateway("/api");
    transport.respond("/api/market/", json!({ "up_count": 0 }));

    let overview: MarketOverview =
        block_on(gateway.fetch(&Endpoint::MarketOverview, RequestOptions::default())).unwrap();

    assert_eq!(overview.up_count, Some(0));
    assert_eq!(overview.total_stocks, None);
    assert!(overview.sh_index.is_none());
}
