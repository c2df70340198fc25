use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        event::{CreateSportEventRequest, SportEventResponse, UpdateSportEventRequest},
        matches::MatchResponse,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::{ExceptionDetails, WebError};
use crate::extract::{ApiJson, ApiPath};

use super::services;

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "List all sport events", body = Vec<SportEventResponse>)
    ),
    tag = "events"
)]
pub async fn list_events(State(db): State<Database>) -> Result<Response, WebError> {
    let events = services::list_events(db.pool()).await?;

    let response: Vec<SportEventResponse> =
        events.into_iter().map(SportEventResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Sport event ID")
    ),
    responses(
        (status = 200, description = "Sport event found", body = SportEventResponse),
        (status = 404, description = "Sport event not found", body = ExceptionDetails)
    ),
    tag = "events"
)]
pub async fn get_event(
    State(db): State<Database>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, WebError> {
    let event = services::get_event(db.pool(), id).await?;

    Ok(Json(SportEventResponse::from(event)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateSportEventRequest,
    responses(
        (status = 201, description = "Sport event created successfully", body = SportEventResponse),
        (status = 400, description = "Validation error", body = ExceptionDetails),
        (status = 404, description = "Placement team not found", body = ExceptionDetails),
        (status = 422, description = "Invalid placements", body = ExceptionDetails)
    ),
    tag = "events"
)]
pub async fn create_event(
    State(db): State<Database>,
    ApiJson(req): ApiJson<CreateSportEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::create_event(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(SportEventResponse::from(event))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Sport event ID")
    ),
    request_body = UpdateSportEventRequest,
    responses(
        (status = 200, description = "Sport event updated successfully", body = SportEventResponse),
        (status = 400, description = "Validation error", body = ExceptionDetails),
        (status = 404, description = "Sport event or placement team not found", body = ExceptionDetails),
        (status = 422, description = "Invalid placements", body = ExceptionDetails)
    ),
    tag = "events"
)]
pub async fn update_event(
    State(db): State<Database>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<UpdateSportEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let updated = services::update_event(db.pool(), id, &req).await?;

    Ok(Json(SportEventResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Sport event ID")
    ),
    responses(
        (status = 204, description = "Sport event deleted, its matches are kept"),
        (status = 404, description = "Sport event not found", body = ExceptionDetails)
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(db): State<Database>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, WebError> {
    services::delete_event(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}/matches",
    params(
        ("id" = Uuid, Path, description = "Sport event ID")
    ),
    responses(
        (status = 200, description = "Matches of the bracket", body = Vec<MatchResponse>),
        (status = 404, description = "Sport event not found", body = ExceptionDetails)
    ),
    tag = "events"
)]
pub async fn list_event_matches(
    State(db): State<Database>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, WebError> {
    let matches = services::list_event_matches(db.pool(), id).await?;

    let response: Vec<MatchResponse> = matches.into_iter().map(MatchResponse::from).collect();

    Ok(Json(response).into_response())
}
