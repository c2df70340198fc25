use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::{PaginatedResponse, PaginationParams},
        matches::{CreateMatchRequest, MatchDetailResponse, MatchResponse, UpdateMatchRequest},
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::{ExceptionDetails, WebError};
use crate::extract::{ApiJson, ApiPath, ApiQuery};

use super::services;

#[utoipa::path(
    get,
    path = "/api/matches",
    params(PaginationParams),
    responses(
        (status = 200, description = "Matches of every sport", body = PaginatedResponse<MatchResponse>),
        (status = 400, description = "Invalid pagination", body = ExceptionDetails)
    ),
    tag = "matches"
)]
pub async fn list_matches(
    State(db): State<Database>,
    ApiQuery(pagination): ApiQuery<PaginationParams>,
) -> Result<Response, WebError> {
    pagination.validate().map_err(WebError::BadRequest)?;

    let (matches, total_items) = services::list_matches(db.pool(), &pagination).await?;

    let response = PaginatedResponse::new(
        matches.into_iter().map(MatchResponse::from).collect(),
        pagination.page,
        pagination.page_size,
        total_items,
    );

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/matches/sports/{sport}",
    params(
        ("sport" = String, Path, description = "Sport code, e.g. CHESS or TABLE_TENNIS")
    ),
    responses(
        (status = 200, description = "Matches of the sport", body = Vec<MatchResponse>),
        (status = 400, description = "Unsupported sport", body = ExceptionDetails)
    ),
    tag = "matches"
)]
pub async fn list_sport_matches(
    State(db): State<Database>,
    ApiPath(sport): ApiPath<String>,
) -> Result<Response, WebError> {
    let matches = services::list_sport_matches(db.pool(), &sport).await?;

    let response: Vec<MatchResponse> = matches.into_iter().map(MatchResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/matches/sports/{sport}",
    params(
        ("sport" = String, Path, description = "Sport code, e.g. CHESS or TABLE_TENNIS")
    ),
    request_body = CreateMatchRequest,
    responses(
        (status = 201, description = "Match created successfully", body = MatchResponse),
        (status = 400, description = "Validation error or unsupported sport", body = ExceptionDetails),
        (status = 404, description = "Team, participant or event not found", body = ExceptionDetails),
        (status = 422, description = "Inconsistent match", body = ExceptionDetails)
    ),
    tag = "matches"
)]
pub async fn create_match(
    State(db): State<Database>,
    ApiPath(sport): ApiPath<String>,
    ApiJson(req): ApiJson<CreateMatchRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let created = services::create_match(db.pool(), &sport, &req).await?;

    Ok((StatusCode::CREATED, Json(MatchResponse::from(created))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/matches/sports/{sport}/{id}",
    params(
        ("sport" = String, Path, description = "Sport code"),
        ("id" = Uuid, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Match of that sport found", body = MatchResponse),
        (status = 400, description = "Unsupported sport", body = ExceptionDetails),
        (status = 404, description = "No match of that sport with this ID", body = ExceptionDetails)
    ),
    tag = "matches"
)]
pub async fn get_sport_match(
    State(db): State<Database>,
    ApiPath((sport, id)): ApiPath<(String, Uuid)>,
) -> Result<Response, WebError> {
    let m = services::get_sport_match(db.pool(), &sport, id).await?;

    Ok(Json(MatchResponse::from(m)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/matches/{id}",
    params(
        ("id" = Uuid, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Match found", body = MatchResponse),
        (status = 404, description = "Match not found", body = ExceptionDetails)
    ),
    tag = "matches"
)]
pub async fn get_match(
    State(db): State<Database>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, WebError> {
    let m = services::get_match(db.pool(), id).await?;

    Ok(Json(MatchResponse::from(m)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/matches/{id}/detailed",
    params(
        ("id" = Uuid, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Match with roster and sport specific records", body = MatchDetailResponse),
        (status = 404, description = "Match not found", body = ExceptionDetails)
    ),
    tag = "matches"
)]
pub async fn get_match_detailed(
    State(db): State<Database>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, WebError> {
    let detailed = services::get_match_detailed(db.pool(), id).await?;

    Ok(Json(detailed).into_response())
}

#[utoipa::path(
    get,
    path = "/api/matches/{id}/type",
    params(
        ("id" = Uuid, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Discriminator of the match, e.g. \"CHESS\"", body = String),
        (status = 404, description = "Match not found", body = ExceptionDetails)
    ),
    tag = "matches"
)]
pub async fn get_match_type(
    State(db): State<Database>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, WebError> {
    let sport = services::find_match_type(db.pool(), id).await?;

    Ok(Json(sport).into_response())
}

#[utoipa::path(
    put,
    path = "/api/matches/{id}",
    params(
        ("id" = Uuid, Path, description = "Match ID")
    ),
    request_body = UpdateMatchRequest,
    responses(
        (status = 200, description = "Match updated successfully", body = MatchResponse),
        (status = 400, description = "Validation error", body = ExceptionDetails),
        (status = 404, description = "Match not found", body = ExceptionDetails),
        (status = 422, description = "Inconsistent match", body = ExceptionDetails)
    ),
    tag = "matches"
)]
pub async fn update_match(
    State(db): State<Database>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<UpdateMatchRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let updated = services::update_match(db.pool(), id, &req).await?;

    Ok(Json(MatchResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/matches/{id}",
    params(
        ("id" = Uuid, Path, description = "Match ID")
    ),
    responses(
        (status = 204, description = "Match deleted with its goals and cards"),
        (status = 404, description = "Match not found", body = ExceptionDetails)
    ),
    tag = "matches"
)]
pub async fn delete_match(
    State(db): State<Database>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, WebError> {
    services::delete_match(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
