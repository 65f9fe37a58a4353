//! Bond endpoints.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::dto::{CalculateBondRequest, CalculateBondResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// Calculate current yield, YTM, classification and cash-flow schedule.
///
/// The body is validated with the shared rules before any calculation; the
/// bond is treated as issued on the server's calculation date.
pub async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<CalculateBondRequest>, JsonRejection>,
) -> ApiResult<Json<CalculateBondResponse>> {
    let Json(form) = payload?;
    let inputs = form.validate()?;
    let issue_date = state.calculation_date();

    let response = state.calculator.calculate(&inputs, issue_date)?;

    tracing::info!(
        face_value = inputs.face_value,
        market_price = inputs.market_price,
        periods = response.periods(),
        ytm = response.ytm,
        "bond calculated"
    );

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use bondcalc_core::{
        BondCalculationResponse, BondDefaults, BondForm, PremiumDiscountIndicator,
    };
    use chrono::NaiveDate;
    use serde_json::{json, Value};

    use crate::config::ServerConfig;
    use crate::dto::{ErrorMessage, ErrorResponse};
    use crate::server::create_router;
    use crate::state::AppState;

    const CALCULATE: &str = "/api/v1/bonds/calculate";

    fn create_test_server() -> TestServer {
        let state = AppState::new(ServerConfig {
            valuation_date: NaiveDate::from_ymd_opt(2026, 1, 15),
            ..ServerConfig::default()
        });
        TestServer::new(create_router(state)).unwrap()
    }

    #[tokio::test]
    async fn test_calculate_default_bond() {
        let server = create_test_server();

        let response = server.post(CALCULATE).json(&BondDefaults::form()).await;
        response.assert_status_ok();

        let body: BondCalculationResponse = response.json();
        assert!((body.current_yield - 0.0526).abs() < 1e-4);
        assert_eq!(body.premium_or_discount, PremiumDiscountIndicator::Discount);
        assert_eq!(body.cash_flow_schedule.len(), 10);
        assert!(body
            .cash_flow_schedule
            .iter()
            .all(|item| (item.coupon_payment - 25.0).abs() < 1e-12));
        assert_eq!(
            body.cash_flow_schedule[0].payment_date,
            NaiveDate::from_ymd_opt(2026, 7, 15).unwrap()
        );
        assert_eq!(body.inputs_echo, BondDefaults::inputs());
    }

    #[tokio::test]
    async fn test_calculate_wire_format() {
        let server = create_test_server();

        let response = server
            .post(CALCULATE)
            .json(&json!({
                "faceValue": 1000,
                "annualCouponRate": 0,
                "marketPrice": 1000,
                "yearsToMaturity": 2,
                "couponFrequency": "annual"
            }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["currentYield"], 0.0);
        assert_eq!(body["ytm"], 0.0);
        assert_eq!(body["premiumOrDiscount"], "par");
        assert_eq!(body["totalInterest"], 0.0);
        assert_eq!(body["cashFlowSchedule"][1]["paymentDate"], "2028-01-15");
        assert_eq!(body["cashFlowSchedule"][1]["remainingPrincipal"], 0.0);
        assert_eq!(body["inputsEcho"]["couponFrequency"], "annual");
    }

    #[tokio::test]
    async fn test_validation_errors_listed() {
        let server = create_test_server();

        let form = BondForm {
            face_value: Some(-5.0),
            market_price: None,
            ..BondDefaults::form()
        };
        let response = server.post(CALCULATE).json(&form).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: ErrorResponse = response.json();
        assert_eq!(body.status_code, 400);
        assert_eq!(body.error, "Bad Request");
        assert_eq!(
            body.message,
            ErrorMessage::Many(vec![
                "Face value must be greater than 0".to_string(),
                "Market price is required".to_string(),
            ])
        );
    }

    #[tokio::test]
    async fn test_unknown_frequency_rejected() {
        let server = create_test_server();

        let response = server
            .post(CALCULATE)
            .json(&json!({
                "faceValue": 1000,
                "annualCouponRate": 5,
                "marketPrice": 950,
                "yearsToMaturity": 5,
                "couponFrequency": "quarterly"
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(
            body["message"],
            json!(["Coupon frequency must be one of: annual, semiAnnual"])
        );
    }

    #[tokio::test]
    async fn test_huge_maturity_rejected() {
        let server = create_test_server();

        let form = BondForm {
            years_to_maturity: Some(1.0e12),
            ..BondDefaults::form()
        };
        let response = server.post(CALCULATE).json(&form).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(
            body["message"],
            json!(["Years to maturity must be 100 or less"])
        );

        // The server keeps serving afterwards
        server
            .post(CALCULATE)
            .json(&BondDefaults::form())
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let server = create_test_server();

        let response = server
            .post(CALCULATE)
            .text("{\"faceValue\": 1000,")
            .content_type("application/json")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["statusCode"], 400);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_wrong_json_type() {
        let server = create_test_server();

        let response = server
            .post(CALCULATE)
            .json(&json!({ "faceValue": "a thousand" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: ErrorResponse = response.json();
        assert!(matches!(body.message, ErrorMessage::One(_)));
    }

    #[tokio::test]
    async fn test_unreachable_price_is_unprocessable() {
        let server = create_test_server();

        let form = BondForm {
            market_price: Some(1.0e12),
            years_to_maturity: Some(1.0),
            ..BondDefaults::form()
        };
        let response = server.post(CALCULATE).json(&form).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = response.json();
        assert_eq!(body["statusCode"], 422);
        assert_eq!(body["error"], "Unprocessable Entity");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let server = create_test_server();

        let response = server.get("/api/v1/bonds").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["message"], "Cannot GET /api/v1/bonds");
    }
}
