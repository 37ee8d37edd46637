use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::RouteController;
use crate::models::route::{CreateRouteRequest, Route, RouteNameQuery, UpdateRouteRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_path_id;

pub fn create_route_router() -> Router<AppState> {
    Router::new()
        .route("/route/", get(get_routes_by_name).post(create_route))
        .route(
            "/route/:id",
            get(get_route).put(update_route).delete(delete_route),
        )
}

async fn get_routes_by_name(
    State(state): State<AppState>,
    Query(query): Query<RouteNameQuery>,
) -> Result<Json<Vec<Route>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    Ok(Json(controller.get_by_name(&query.name).await?))
}

async fn get_route(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Route>, AppError> {
    validate_path_id(id)?;
    let controller = RouteController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn create_route(
    State(state): State<AppState>,
    Json(request): Json<CreateRouteRequest>,
) -> Result<(StatusCode, Json<Route>), AppError> {
    let controller = RouteController::new(state.pool.clone());
    let route = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(route)))
}

async fn update_route(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateRouteRequest>,
) -> Result<Json<Route>, AppError> {
    validate_path_id(id)?;
    let controller = RouteController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_route(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    validate_path_id(id)?;
    let controller = RouteController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "detail": "Route deleted successfully"
    })))
}

pub async fn list_routes(State(state): State<AppState>) -> Result<Json<Vec<Route>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}
