//! End-to-end HTTP tests driving the router over a real database and
//! a scripted vision model.

mod support;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use hedgebook::testkit::vision::ScriptedVision;
use support::{fake_png_base64, test_router, TempDb};

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, value)
}

fn leg_payload(pair_id: &str, position: &str, house: &str, odds: &str, stake: &str) -> Value {
    json!({
        "pairId": pair_id,
        "betPosition": position,
        "teamA": "Flamengo",
        "teamB": "Palmeiras",
        "sport": "Futebol",
        "league": "Brasileirão Série A",
        "gameDate": "26/09/2025",
        "gameTime": "19:30",
        "bettingHouse": house,
        "betType": "Mais de 2.5",
        "odds": odds,
        "stake": stake,
        "payout": "210",
        "totalPairStake": "200",
        "profitPercentage": "5",
        "isVerified": true
    })
}

#[tokio::test]
async fn create_and_fetch_a_full_pair() {
    let db = TempDb::create("api-pair");
    let router = test_router(&db, ScriptedVision::failing());

    let (status, leg_a) = send(
        &router,
        "POST",
        "/bets",
        Some(leg_payload("pair-1", "A", "Betano", "2.10", "100")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(leg_a["pairId"], "pair-1");
    assert_eq!(leg_a["status"], "pending");
    // Dates are canonicalized on the way in.
    assert_eq!(leg_a["gameDate"], "26-09-2025");
    // Selected side defaults to the bet type.
    assert_eq!(leg_a["selectedSide"], "Mais de 2.5");

    let (status, _) = send(
        &router,
        "POST",
        "/bets",
        Some(leg_payload("pair-1", "B", "Bet365", "2.10", "100")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, legs) = send(&router, "GET", "/bets/pair/pair-1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(legs.as_array().unwrap().len(), 2);
    assert_eq!(legs[0]["betPosition"], "A");
    assert_eq!(legs[1]["betPosition"], "B");
}

#[tokio::test]
async fn missing_bet_returns_404() {
    let db = TempDb::create("api-404");
    let router = test_router(&db, ScriptedVision::failing());

    let (status, body) = send(&router, "GET", "/bets/no-such-id", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("no-such-id"));
}

#[tokio::test]
async fn status_updates_flow_into_the_pair_report() {
    let db = TempDb::create("api-stats");
    let router = test_router(&db, ScriptedVision::failing());

    let (_, leg_a) = send(
        &router,
        "POST",
        "/bets",
        Some(leg_payload("pair-1", "A", "Betano", "2.10", "100")),
    )
    .await;
    let (_, leg_b) = send(
        &router,
        "POST",
        "/bets",
        Some(leg_payload("pair-1", "B", "Bet365", "2.10", "100")),
    )
    .await;

    let uri = format!("/bets/{}/status", leg_a["id"].as_str().unwrap());
    let (status, _) = send(&router, "PUT", &uri, Some(json!({"status": "won"}))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let uri = format!("/bets/{}/status", leg_b["id"].as_str().unwrap());
    let (status, _) = send(&router, "PUT", &uri, Some(json!({"status": "lost"}))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, report) = send(&router, "GET", "/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["totalPairs"], 1);
    assert_eq!(report["won"], 1);
    assert_eq!(report["incomplete"], 0);
    // Payout 210 against 200 staked.
    assert_eq!(report["netResult"], "10");
    assert_eq!(report["totalStaked"], "200");
}

#[tokio::test]
async fn unknown_status_value_is_rejected() {
    let db = TempDb::create("api-bad-status");
    let router = test_router(&db, ScriptedVision::failing());

    let (_, leg) = send(
        &router,
        "POST",
        "/bets",
        Some(leg_payload("pair-1", "A", "Betano", "2.10", "100")),
    )
    .await;

    let uri = format!("/bets/{}/status", leg["id"].as_str().unwrap());
    let (status, _) = send(&router, "PUT", &uri, Some(json!({"status": "cancelled"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn delete_removes_the_leg() {
    let db = TempDb::create("api-delete");
    let router = test_router(&db, ScriptedVision::failing());

    let (_, leg) = send(
        &router,
        "POST",
        "/bets",
        Some(leg_payload("pair-1", "A", "Betano", "2.10", "100")),
    )
    .await;
    let uri = format!("/bets/{}", leg["id"].as_str().unwrap());

    let (status, _) = send(&router, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&router, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

fn verify_leg(position: &str, team_a: &str, team_b: &str) -> Value {
    json!({
        "betPosition": position,
        "teamA": team_a,
        "teamB": team_b,
        "bettingHouse": "Betano",
        "betType": "Mais de 2.5",
        "gameDate": "26-09-2025",
        "odds": "2.10",
        "stake": "100",
        "profitPercentage": "5"
    })
}

#[tokio::test]
async fn verify_accepts_a_clean_pair() {
    let db = TempDb::create("api-verify-ok");
    let router = test_router(&db, ScriptedVision::failing());

    let body = json!({
        "legA": verify_leg("A", "Flamengo", "Palmeiras"),
        "legB": verify_leg("B", "Palmeiras", "Flamengo"),
    });
    let (status, _) = send(&router, "POST", "/bets/verify", Some(body)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn verify_reports_field_keyed_issues() {
    let db = TempDb::create("api-verify-bad");
    let router = test_router(&db, ScriptedVision::failing());

    // Same position on both legs, different matches, and a zero stake.
    let mut leg_b = verify_leg("A", "Grêmio", "Internacional");
    leg_b["stake"] = json!("0");
    let body = json!({
        "legA": verify_leg("A", "Flamengo", "Palmeiras"),
        "legB": leg_b,
    });

    let (status, response) = send(&router, "POST", "/bets/verify", Some(body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let issues = response["issues"].as_array().unwrap();
    let fields: Vec<&str> = issues
        .iter()
        .map(|i| i["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"betPosition"));
    assert!(fields.contains(&"teams"));
    assert!(fields.contains(&"stakeB"));
}

#[tokio::test]
async fn analyze_maps_a_structured_vision_reply() {
    let db = TempDb::create("api-analyze");
    let reply = r#"```json
{
  "teamA": "Flamengo", "teamB": "Palmeiras",
  "sport": "Futebol", "league": "Brasileirão Série A",
  "gameDate": "26/09/2025", "gameTime": "19:30",
  "profitPercentage": "4,35",
  "legA": {"bettingHouse": "Betano", "betType": "Mais de 2,5", "odds": "2,10", "stake": "100,00", "profit": "10,00"},
  "legB": {"bettingHouse": "KTO", "betType": "Menos de 2,5", "odds": "2,05", "stake": "102,44", "profit": "7,56"}
}
```"#;
    let router = test_router(&db, ScriptedVision::replying(reply));

    let body = json!({"imageBase64": fake_png_base64()});
    let (status, data) = send(&router, "POST", "/ocr/analyze", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["teamA"], "Flamengo");
    assert_eq!(data["gameDate"], "26-09-2025");
    assert_eq!(data["profitPercentage"], "4.35");
    assert_eq!(data["legA"]["bettingHouse"], "Betano");
    assert_eq!(data["legB"]["stake"], "102.44");
}

#[tokio::test]
async fn analyze_rejects_malformed_images_as_retryable() {
    let db = TempDb::create("api-analyze-bad");
    let router = test_router(&db, ScriptedVision::replying("{}"));

    let body = json!({"imageBase64": "not an image"});
    let (status, response) = send(&router, "POST", "/ocr/analyze", Some(body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response["retry"], true);
}

#[tokio::test]
async fn raw_analysis_renders_plain_text() {
    let db = TempDb::create("api-raw");
    let reply = "Flamengo \u{2013} Palmeiras\nBetano Mais de 2,5 2,10 R$ 100,00 10,00";
    let router = test_router(&db, ScriptedVision::replying(reply));

    let body = json!({"imageBase64": fake_png_base64()});
    let (status, text) = send(&router, "POST", "/ocr/raw", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    let text = text.as_str().unwrap();
    assert!(text.contains("Flamengo"));
    assert!(text.contains("Betano"));
}
