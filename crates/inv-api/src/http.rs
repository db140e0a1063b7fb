use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use inv_core::analysis::{self, AnalysisKind, AnalysisPlan};
use inv_core::checker::{check_deck, check_parameters, check_results};
use inv_core::deck::generate_deck;
use inv_core::params::validate;
use inv_devices::DeviceParameters;

use crate::schema::{
    CheckDeckRequest, DeckRequest, ErrorBody, ErrorResponse, HealthResponse, ParamsRequest,
};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub bind_addr: String,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

pub async fn run(config: HttpServerConfig) -> Result<(), String> {
    let app = build_router();
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|err| format!("bind {} failed: {}", config.bind_addr, err))?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .await
        .map_err(|err| format!("server error: {}", err))
}

pub fn build_router() -> Router {
    Router::new()
        .route("/v1/health", get(health))
        .route("/v1/run/{analysis}", post(run_analysis))
        .route("/v1/deck", post(deck))
        .route("/v1/check/deck", post(check_deck_text))
        .route("/v1/check/params", post(check_params))
        .route("/v1/check/results", post(check_run_results))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `dc` or `tran`; the report carries the kind in its `analysis` field.
pub async fn run_analysis(
    Path(kind): Path<AnalysisKind>,
    Json(payload): Json<ParamsRequest>,
) -> Response {
    let params = match validated(&payload) {
        Ok(params) => params,
        Err(err) => return err,
    };
    let plan = AnalysisPlan { kind, params };
    Json(analysis::run(&plan)).into_response()
}

pub async fn deck(Json(payload): Json<DeckRequest>) -> Response {
    let params = match validated(&payload.params) {
        Ok(params) => params,
        Err(err) => return err,
    };
    let kind = payload.analysis.unwrap_or(AnalysisKind::Dc);
    Json(generate_deck(kind, &params)).into_response()
}

pub async fn check_deck_text(Json(payload): Json<CheckDeckRequest>) -> Response {
    Json(check_deck(&payload.deck)).into_response()
}

/// Range warnings only; nonsensical values still get the 400 envelope.
pub async fn check_params(Json(payload): Json<ParamsRequest>) -> Response {
    let params = match validated(&payload) {
        Ok(params) => params,
        Err(err) => return err,
    };
    Json(check_parameters(&params)).into_response()
}

pub async fn check_run_results(Json(payload): Json<ParamsRequest>) -> Response {
    let params = match validated(&payload) {
        Ok(params) => params,
        Err(err) => return err,
    };
    Json(check_results(&params)).into_response()
}

fn validated(payload: &ParamsRequest) -> Result<DeviceParameters, Response> {
    let params = payload.to_params();
    validate(&params).map_err(|err| {
        tracing::warn!(%err, "rejected parameters");
        api_error(
            StatusCode::BAD_REQUEST,
            "INVALID_PARAMETERS",
            "parameters must be positive, finite and within limits",
            Some(vec![err.to_string()]),
        )
    })?;
    Ok(params)
}

fn api_error(
    status: StatusCode,
    code: &str,
    message: &str,
    details: Option<Vec<String>>,
) -> Response {
    let body = ErrorResponse {
        error: ErrorBody {
            code: code.to_string(),
            message: message.to_string(),
            details,
        },
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn params_request(vdd: f64, wp: f64, wn: f64) -> ParamsRequest {
        ParamsRequest {
            supply_voltage: Some(vdd),
            p_width: Some(wp),
            n_width: Some(wn),
            channel_length: None,
        }
    }

    #[tokio::test]
    async fn dc_run_returns_threshold_and_series() {
        let response = run_analysis(Path(AnalysisKind::Dc), Json(params_request(5.0, 2.0, 1.0))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["analysis"], "dc");
        assert_eq!(body["threshold"]["switching_threshold"], 2.5);
        assert_eq!(body["series"][0]["name"], "VTC");
        assert_eq!(body["layout"]["title"], "Voltage Transfer Characteristic (VTC)");
    }

    #[tokio::test]
    async fn tran_run_returns_delays() {
        let response = run_analysis(Path(AnalysisKind::Tran), Json(params_request(5.0, 4.0, 1.0))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["analysis"], "tran");
        assert_eq!(body["delays"]["fall_delay"], 4.0);
        assert_eq!(body["delays"]["rise_delay"], 1.0);
        assert_eq!(body["average_delay"], 2.5);
    }

    #[tokio::test]
    async fn zero_width_is_rejected() {
        let response = run_analysis(Path(AnalysisKind::Dc), Json(params_request(5.0, 2.0, 0.0))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "INVALID_PARAMETERS");
        assert!(body["error"]["details"][0]
            .as_str()
            .unwrap()
            .contains("n_width"));
    }

    #[tokio::test]
    async fn oversized_supply_is_rejected() {
        let response =
            run_analysis(Path(AnalysisKind::Dc), Json(params_request(1e15, 2.0, 1.0))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "INVALID_PARAMETERS");
        assert!(body["error"]["details"][0]
            .as_str()
            .unwrap()
            .contains("supply_voltage"));
    }

    #[tokio::test]
    async fn generated_deck_round_trips_through_checker() {
        let request = DeckRequest {
            analysis: None,
            params: ParamsRequest::default(),
        };
        let body = body_json(deck(Json(request)).await).await;
        assert_eq!(body["analysis"], "dc");
        let text = body["deck"].as_str().unwrap().to_string();

        let checked = body_json(check_deck_text(Json(CheckDeckRequest { deck: text })).await).await;
        assert_eq!(checked["status"], "success");
    }

    #[tokio::test]
    async fn broken_deck_reports_error_status() {
        let request = CheckDeckRequest {
            deck: "VDD vdd 0 DC -1V\n".to_string(),
        };
        let body = body_json(check_deck_text(Json(request)).await).await;
        assert_eq!(body["status"], "error");
        let messages = body["messages"].as_array().unwrap();
        assert!(messages
            .iter()
            .any(|m| m.as_str().unwrap().contains("must be a positive number")));
    }

    #[tokio::test]
    async fn parameter_and_result_checks_use_defaults() {
        let body = body_json(check_params(Json(ParamsRequest::default())).await).await;
        assert_eq!(body["status"], "warning");
        let body = body_json(check_run_results(Json(ParamsRequest::default())).await).await;
        assert_eq!(body["status"], "success");
    }

    #[test]
    fn request_aliases_match_slider_names() {
        let request: DeckRequest =
            serde_json::from_str(r#"{"analysis":"tran","vdd":3.3,"wp":4,"wn":2,"length":0.25}"#)
                .unwrap();
        assert_eq!(request.analysis, Some(AnalysisKind::Tran));
        let params = request.params.to_params();
        assert_eq!(params, DeviceParameters::new(3.3, 4.0, 2.0, 0.25));
    }

    #[test]
    fn router_builds() {
        let _ = build_router();
    }
}
