//! HTTP routes, payload validation, and response envelopes

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::array_ops::ArrayReport;
use crate::error::Result;
use crate::orders::{partition_orders, Order};
use crate::storage::OrderStore;
use crate::students::{
    average_age, filter_passed_students, sort_students_by_grade, student_names, Student,
};

const GREETING: &str = "server is up and ready";
const ORDERS_PROCESSED: &str = "Orders are processed and stored successfully";

const INVALID_ITEMS: &str = "Invalid payload format, please provide items list";
const INVALID_ARRAY: &str = "Invalid payload format, please provide an array";
const INVALID_STUDENTS: &str = "Invalid payload format, please provide an array of students";

/// HTTP server for the payload-processing endpoints
pub struct ApiServer {
    store: Arc<dyn OrderStore>,
    port: u16,
}

impl ApiServer {
    /// Create new API server
    pub fn new(store: Arc<dyn OrderStore>, port: u16) -> Self {
        Self { store, port }
    }

    /// Start serving requests
    pub async fn start(self) -> Result<()> {
        let addr = format!("0.0.0.0:{}", self.port);
        let app = build_router(self.store);

        info!("Server is running on port {}", self.port);

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Build the application router around an injected order store
pub fn build_router(store: Arc<dyn OrderStore>) -> Router {
    let shared_state = Arc::new(ApiState { store });

    Router::new()
        .route("/", get(index))
        .route("/processOrders", post(process_orders))
        .route("/processArray", post(process_array))
        .route("/processStudents", post(process_students))
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Shared API state
struct ApiState {
    store: Arc<dyn OrderStore>,
}

/// Error envelope: a status code plus `{"error": message}`
#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.to_string(),
        }
    }

    fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Pull a required array field out of the body and deserialize its elements
///
/// Both a missing or non-array field and a shape mismatch inside the array
/// reject with the endpoint's fixed message before any processing happens.
fn extract_array_field<T: DeserializeOwned>(
    body: &Value,
    field: &str,
    message: &str,
) -> std::result::Result<Vec<T>, ApiError> {
    let value = body
        .get(field)
        .filter(|v| v.is_array())
        .ok_or_else(|| ApiError::bad_request(message))?;

    serde_json::from_value(value.clone()).map_err(|e| {
        warn!("Rejecting malformed {} payload: {}", field, e);
        ApiError::bad_request(message)
    })
}

// Handlers

async fn index() -> Json<Value> {
    Json(json!({ "output": GREETING }))
}

/// Success envelope for order ingestion
#[derive(Debug, Serialize)]
struct OrdersResponse {
    message: &'static str,
    matched: Vec<Order>,
    unmatched: Vec<Order>,
}

async fn process_orders(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<Value>,
) -> std::result::Result<Json<OrdersResponse>, ApiError> {
    let items: Vec<Order> = extract_array_field(&body, "items", INVALID_ITEMS)?;

    let (matched, unmatched) = partition_orders(&items);

    let order_ids: Vec<String> = items.iter().map(|item| item.order_id.clone()).collect();
    if let Err(e) = state.store.record_order_ids(&order_ids).await {
        warn!("Error processing orders: {}", e);
        return Err(ApiError::internal());
    }

    Ok(Json(OrdersResponse {
        message: ORDERS_PROCESSED,
        matched,
        unmatched,
    }))
}

async fn process_array(
    Json(body): Json<Value>,
) -> std::result::Result<Json<ArrayReport>, ApiError> {
    let numbers: Vec<f64> = extract_array_field(&body, "array", INVALID_ARRAY)?;

    Ok(Json(ArrayReport::compute(&numbers)))
}

/// Aggregated student analytics
#[derive(Debug, Serialize)]
struct StudentsReport {
    #[serde(rename = "Passed students")]
    passed: Vec<Student>,
    #[serde(rename = "Student names")]
    names: Vec<String>,
    #[serde(rename = "Students sorted by grade")]
    sorted_by_grade: Vec<Student>,
    #[serde(rename = "Average age of students")]
    average_age: f64,
}

async fn process_students(
    Json(body): Json<Value>,
) -> std::result::Result<Json<StudentsReport>, ApiError> {
    let students: Vec<Student> = extract_array_field(&body, "students", INVALID_STUDENTS)?;

    Ok(Json(StudentsReport {
        passed: filter_passed_students(&students),
        names: student_names(&students),
        sorted_by_grade: sort_students_by_grade(&students),
        average_age: average_age(&students),
    }))
}
