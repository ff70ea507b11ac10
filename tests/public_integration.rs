use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use coinse_api_client::error::CoinseError;
use coinse_api_client::rest::CoinseRestClient;

fn build_public_client(server: &MockServer) -> CoinseRestClient {
    CoinseRestClient::builder().base_url(server.uri()).build()
}

#[tokio::test]
async fn test_markets_list() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "status": "true",
        "markets": [
            { "pair": "ltc_btc", "status": "healthy" },
            { "pair": "btc_usd", "status": "healthy" }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/markets/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let markets = client.markets().await.unwrap();

    assert_eq!(markets, response);
}

#[tokio::test]
async fn test_coins_list() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "coins": [
            { "coin": "LTC", "name": "Litecoin" }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/coins/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let coins = client.coins().await.unwrap();

    assert_eq!(coins["coins"][0]["coin"], "LTC");
}

#[tokio::test]
async fn test_market_data() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "markets": {
            "ltc_btc": { "marketdepth": { "asks": [], "bids": [] } }
        }
    });

    Mock::given(method("GET"))
        .and(path("/markets/data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let data = client.market_data().await.unwrap();

    assert_eq!(data, response);
}

#[tokio::test]
async fn test_trades_for_pair() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "trades": [
            { "rate": "0.0021", "quantity": "12.5", "type": "buy" }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/market/ltc_btc/trades"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let trades = client.trades("ltc_btc").await.unwrap();

    assert_eq!(trades["trades"][0]["type"], "buy");
}

#[tokio::test]
async fn test_depth_for_pair() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "marketdepth": {
            "asks": [{ "r": "0.0022", "q": "5" }],
            "bids": [{ "r": "0.0021", "q": "3" }]
        }
    });

    Mock::given(method("GET"))
        .and(path("/market/ltc_btc/depth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let depth = client.depth("ltc_btc").await.unwrap();

    assert_eq!(depth, response);
}

#[tokio::test]
async fn test_public_error_field_fails_the_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/market/nope_btc/depth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": "no such market"
        })))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let err = client.depth("nope_btc").await.unwrap_err();
    match err {
        CoinseError::Api(message) => assert_eq!(message, "no such market"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_public_get_sends_no_auth_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/markets/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "markets": []
        })))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    client.markets().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("sign").is_none());
    assert!(requests[0].headers.get("key").is_none());
    assert!(requests[0].body.is_empty());
}
