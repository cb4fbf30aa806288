//! Integration tests for the grant forecast API.
//!
//! This test suite drives the router end to end:
//! - Monthly proration with a grade fringe
//! - Biweekly proration with FICA and medical/dental plans
//! - Zero-length ranges and zero FTE
//! - Per-request assumption overrides
//! - Multi-employee grant summaries
//! - Authorization and error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use grant_forecast::api::{AppState, PASSWORD_HEADER, USER_HEADER, create_router};
use grant_forecast::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn router_for(config: &str) -> Router {
    let config = ConfigLoader::load(config).expect("Failed to load config");
    create_router(AppState::new(config))
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn send(
    router: Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    credentials: Option<(&str, &str)>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("Content-Type", "application/json");
    }
    if let Some((user, password)) = credentials {
        builder = builder
            .header(USER_HEADER, user)
            .header(PASSWORD_HEADER, password);
    }
    let body = body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty);

    let response = router.oneshot(builder.body(body).unwrap()).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_forecast(config: &str, body: Value) -> (StatusCode, Value) {
    send(
        router_for(config),
        "POST",
        "/forecast",
        Some(body),
        Some(("admin", "laredo123")),
    )
    .await
}

fn forecast_request(grade: &str, salary: u32, fte: &str, start: &str, end: &str) -> Value {
    json!({
        "employee": {
            "name": "Daniel Oyervidez",
            "grade": grade,
            "annual_salary": salary.to_string(),
            "fte": fte
        },
        "grant": {"start_date": start, "end_date": end}
    })
}

fn line_amount(result: &Value, code: &str) -> Decimal {
    let line = result["breakdown"]["lines"]
        .as_array()
        .unwrap()
        .iter()
        .find(|l| l["code"] == code)
        .unwrap_or_else(|| panic!("no line with code {}", code));
    decimal(line["amount"].as_str().unwrap())
}

fn total(result: &Value) -> Decimal {
    decimal(result["breakdown"]["total"].as_str().unwrap())
}

fn assert_total_is_sum_of_lines(result: &Value) {
    let sum: Decimal = result["breakdown"]["lines"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| decimal(l["amount"].as_str().unwrap()))
        .sum();
    assert_eq!(total(result), sum);
}

const MONTHLY: &str = "./config/monthly";
const BIWEEKLY: &str = "./config/biweekly";

// =============================================================================
// Monthly proration
// =============================================================================

#[tokio::test]
async fn test_monthly_calendar_year_grade_a() {
    let (status, result) = post_forecast(
        MONTHLY,
        forecast_request("Grade A", 60000, "1.0", "2026-01-01", "2026-12-31"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["breakdown"]["proration"]["days"], 364);
    assert_eq!(line_amount(&result, "SAL"), decimal("62181.34"));
    assert_eq!(line_amount(&result, "FRG"), decimal("21763.47"));
    assert_eq!(total(&result), decimal("83944.81"));
    assert_total_is_sum_of_lines(&result);
}

#[tokio::test]
async fn test_monthly_grade_b_uses_lower_fringe() {
    let (status, result) = post_forecast(
        MONTHLY,
        forecast_request("Grade B", 60000, "1.0", "2026-01-01", "2026-12-31"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(line_amount(&result, "SAL"), decimal("62181.34"));
    // 62181.3403... x 0.25 = 15545.335...
    assert_eq!(line_amount(&result, "FRG"), decimal("15545.34"));
}

#[tokio::test]
async fn test_monthly_zero_length_range_is_zero() {
    let (status, result) = post_forecast(
        MONTHLY,
        forecast_request("Grade A", 60000, "1.0", "2026-04-01", "2026-04-01"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["breakdown"]["total"], "0.00");
    assert_eq!(line_amount(&result, "SAL"), Decimal::ZERO);
    assert_eq!(line_amount(&result, "FRG"), Decimal::ZERO);
}

#[tokio::test]
async fn test_monthly_zero_fte_is_zero() {
    let (status, result) = post_forecast(
        MONTHLY,
        forecast_request("Grade A", 60000, "0", "2026-01-01", "2026-12-31"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(line_amount(&result, "SAL"), Decimal::ZERO);
    assert_eq!(line_amount(&result, "FRG"), Decimal::ZERO);
}

// =============================================================================
// Biweekly proration with itemized benefits
// =============================================================================

#[tokio::test]
async fn test_biweekly_with_medical_and_dental() {
    let mut request = forecast_request("Grade A", 60000, "1.0", "2026-01-05", "2026-02-02");
    request["employee"]["benefits"] = json!({"medical": "FAM", "dental": "EE"});

    let (status, result) = post_forecast(BIWEEKLY, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        decimal(result["breakdown"]["proration"]["periods"].as_str().unwrap()),
        decimal("2")
    );
    assert_eq!(line_amount(&result, "SAL"), decimal("4800.00"));
    assert_eq!(line_amount(&result, "FICA"), decimal("367.20"));
    assert_eq!(line_amount(&result, "MED"), decimal("1221.00"));
    assert_eq!(line_amount(&result, "DEN"), decimal("37.50"));
    assert_eq!(total(&result), decimal("6425.70"));
}

#[tokio::test]
async fn test_biweekly_without_elections_has_no_plan_lines() {
    let (status, result) = post_forecast(
        BIWEEKLY,
        forecast_request("Grade B", 52000, "1.0", "2026-01-05", "2026-02-02"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let codes: Vec<&str> = result["breakdown"]["lines"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["SAL", "FICA"]);
}

#[tokio::test]
async fn test_biweekly_zero_days_all_zero() {
    let mut request = forecast_request("Grade A", 60000, "1.0", "2026-03-02", "2026-03-02");
    request["employee"]["benefits"] = json!({"medical": "EE", "dental": "FAM"});

    let (status, result) = post_forecast(BIWEEKLY, request).await;

    assert_eq!(status, StatusCode::OK);
    for line in result["breakdown"]["lines"].as_array().unwrap() {
        assert_eq!(line["amount"], "0.00");
    }
    assert_eq!(result["breakdown"]["total"], "0.00");
}

// =============================================================================
// Assumption overrides
// =============================================================================

#[tokio::test]
async fn test_cola_override_changes_salary() {
    let mut request = forecast_request("Grade A", 60000, "1.0", "2026-01-05", "2026-02-02");
    request["assumptions"] = json!({"cola_rate": "0"});

    let (status, result) = post_forecast(BIWEEKLY, request).await;

    assert_eq!(status, StatusCode::OK);
    // 60000 / 26 x 2
    assert_eq!(line_amount(&result, "SAL"), decimal("4615.38"));
}

#[tokio::test]
async fn test_grade_rate_override_changes_fringe() {
    let mut request = forecast_request("Grade A", 60000, "1.0", "2026-01-01", "2026-12-31");
    request["assumptions"] = json!({"grade_rates": {"Grade A": "0.40"}});

    let (status, result) = post_forecast(MONTHLY, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(line_amount(&result, "FRG"), decimal("24872.54"));
}

#[tokio::test]
async fn test_override_does_not_leak_into_next_request() {
    let state = AppState::new(ConfigLoader::load(BIWEEKLY).unwrap());

    let mut overridden = forecast_request("Grade A", 60000, "1.0", "2026-01-05", "2026-02-02");
    overridden["assumptions"] = json!({"cola_rate": "0.50"});
    let (_, first) = send(
        create_router(state.clone()),
        "POST",
        "/forecast",
        Some(overridden),
        Some(("admin", "laredo123")),
    )
    .await;

    let (_, second) = send(
        create_router(state),
        "POST",
        "/forecast",
        Some(forecast_request("Grade A", 60000, "1.0", "2026-01-05", "2026-02-02")),
        Some(("admin", "laredo123")),
    )
    .await;

    assert_eq!(line_amount(&first, "SAL"), decimal("6923.08"));
    assert_eq!(line_amount(&second, "SAL"), decimal("4800.00"));
}

// =============================================================================
// Grant summaries
// =============================================================================

#[tokio::test]
async fn test_grant_summary_rolls_up_employees() {
    let body = json!({
        "employees": [
            {"name": "Daniel Oyervidez", "grade": "Grade A", "annual_salary": "60000", "fte": "1"},
            {"name": "Ana Garza", "grade": "Grade B", "annual_salary": "52000", "fte": "0.5"}
        ],
        "grant": {"start_date": "2026-01-05", "end_date": "2026-02-02"}
    });

    let (status, result) = send(
        router_for(BIWEEKLY),
        "POST",
        "/forecast/grant",
        Some(body),
        Some(("admin", "laredo123")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["employees"].as_array().unwrap().len(), 2);
    // 4800 + 2080 salary; FICA 367.20 + 159.12
    assert_eq!(result["salary_total"], "6880.00");
    assert_eq!(result["fringe_total"], "526.32");
    assert_eq!(result["grand_total"], "7406.32");
}

#[tokio::test]
async fn test_grant_with_no_employees_is_validation_error() {
    let body = json!({
        "employees": [],
        "grant": {"start_date": "2026-01-05", "end_date": "2026-02-02"}
    });

    let (status, result) = send(
        router_for(BIWEEKLY),
        "POST",
        "/forecast/grant",
        Some(body),
        Some(("admin", "laredo123")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_grant_fails_when_any_employee_fails() {
    let body = json!({
        "employees": [
            {"name": "Daniel Oyervidez", "grade": "Grade A", "annual_salary": "60000", "fte": "1"},
            {"name": "Lupe Reyes", "grade": "Grade C", "annual_salary": "41000", "fte": "1"}
        ],
        "grant": {"start_date": "2026-01-05", "end_date": "2026-02-02"}
    });

    let (status, result) = send(
        router_for(BIWEEKLY),
        "POST",
        "/forecast/grant",
        Some(body),
        Some(("admin", "laredo123")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "UNKNOWN_CATEGORY");
    assert!(result.get("employees").is_none());
}

// =============================================================================
// Authorization
// =============================================================================

#[tokio::test]
async fn test_missing_credentials_are_unauthorized() {
    let (status, result) = send(
        router_for(MONTHLY),
        "POST",
        "/forecast",
        Some(forecast_request("Grade A", 60000, "1", "2026-01-01", "2026-02-01")),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(result["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized() {
    let (status, _) = send(
        router_for(MONTHLY),
        "POST",
        "/forecast",
        Some(forecast_request("Grade A", 60000, "1", "2026-01-01", "2026-02-01")),
        Some(("admin", "letmein")),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_needs_no_credentials() {
    let (status, result) = send(router_for(MONTHLY), "GET", "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["status"], "ok");
    assert_eq!(result["program"], "LAREDO-MONTHLY");
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_error_end_before_start() {
    let (status, result) = post_forecast(
        MONTHLY,
        forecast_request("Grade A", 60000, "1", "2026-12-31", "2026-01-01"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_RANGE");
    assert!(result.get("breakdown").is_none());
}

#[tokio::test]
async fn test_error_unknown_grade() {
    let (status, result) = post_forecast(
        MONTHLY,
        forecast_request("Grade Z", 60000, "1", "2026-01-01", "2026-02-01"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "UNKNOWN_CATEGORY");
    assert!(result["message"].as_str().unwrap().contains("Grade Z"));
}

#[tokio::test]
async fn test_error_unknown_plan_code() {
    let mut request = forecast_request("Grade A", 60000, "1", "2026-01-05", "2026-02-02");
    request["employee"]["benefits"] = json!({"medical": "PLATINUM"});

    let (status, result) = post_forecast(BIWEEKLY, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "UNKNOWN_CATEGORY");
    assert!(result["message"].as_str().unwrap().contains("medical plan"));
}

#[tokio::test]
async fn test_error_plan_election_without_plan_table() {
    let mut request = forecast_request("Grade A", 60000, "1", "2026-01-01", "2026-12-31");
    request["employee"]["benefits"] = json!({"medical": "PLATINUM", "dental": "NOPE"});

    let (status, result) = post_forecast(MONTHLY, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "UNKNOWN_CATEGORY");
    assert!(result["message"].as_str().unwrap().contains("PLATINUM"));
    assert!(result.get("breakdown").is_none());
}

#[tokio::test]
async fn test_error_salary_beyond_limit() {
    let mut request = forecast_request("Grade A", 60000, "1", "2026-01-01", "2026-12-31");
    request["employee"]["annual_salary"] = json!(Decimal::MAX.to_string());

    let (status, result) = post_forecast(MONTHLY, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_error_rate_override_beyond_limit() {
    let mut request = forecast_request("Grade A", 60000, "1", "2026-01-01", "2026-12-31");
    request["assumptions"] = json!({"cola_rate": Decimal::MAX.to_string()});

    let (status, result) = post_forecast(MONTHLY, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_error_override_for_unknown_grade() {
    let mut request = forecast_request("Grade Z", 60000, "1", "2026-01-01", "2026-12-31");
    request["assumptions"] = json!({"grade_rates": {"Grade Z": "0.40"}});

    let (status, result) = post_forecast(MONTHLY, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "UNKNOWN_CATEGORY");
    assert!(result["message"].as_str().unwrap().contains("Grade Z"));
}

#[tokio::test]
async fn test_error_fte_out_of_range() {
    let (status, result) = post_forecast(
        MONTHLY,
        forecast_request("Grade A", 60000, "1.5", "2026-01-01", "2026-02-01"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_error_malformed_json() {
    let response = router_for(MONTHLY)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/forecast")
                .header("Content-Type", "application/json")
                .header(USER_HEADER, "admin")
                .header(PASSWORD_HEADER, "laredo123")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_error_missing_grant() {
    let (status, result) = post_forecast(
        MONTHLY,
        json!({
            "employee": {"name": "Daniel", "grade": "Grade A", "annual_salary": "1", "fte": "1"}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
    assert!(result["message"].as_str().unwrap().contains("grant"));
}

// =============================================================================
// Report envelope
// =============================================================================

#[tokio::test]
async fn test_report_contains_audit_trace_and_metadata() {
    let (status, result) = post_forecast(
        MONTHLY,
        forecast_request("Grade A", 60000, "1", "2026-01-01", "2026-02-01"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["calculation_id"].is_string());
    assert!(result["timestamp"].is_string());
    assert_eq!(result["employee_name"], "Daniel Oyervidez");
    assert_eq!(result["grant_period"]["start_date"], "2026-01-01");

    let steps = result["audit_trace"]["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 5);
    assert_eq!(steps[0]["rule_id"], "grant_day_count");
    assert_eq!(steps[4]["rule_id"], "grade_fringe");
}
