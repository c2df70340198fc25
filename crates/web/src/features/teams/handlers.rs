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
        matches::MatchResponse,
        participant::ParticipantResponse,
        team::{CreateTeamRequest, TeamResponse, UpdateTeamRequest},
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::{ExceptionDetails, WebError};
use crate::extract::{ApiJson, ApiPath, ApiQuery};

use super::services;

#[utoipa::path(
    get,
    path = "/api/teams",
    params(PaginationParams),
    responses(
        (status = 200, description = "Teams ordered by points", body = PaginatedResponse<TeamResponse>),
        (status = 400, description = "Invalid pagination", body = ExceptionDetails)
    ),
    tag = "teams"
)]
pub async fn list_teams(
    State(db): State<Database>,
    ApiQuery(pagination): ApiQuery<PaginationParams>,
) -> Result<Response, WebError> {
    pagination.validate().map_err(WebError::BadRequest)?;

    let (teams, total_items) = services::list_teams(db.pool(), &pagination).await?;

    let response = PaginatedResponse::new(
        teams.into_iter().map(TeamResponse::from).collect(),
        pagination.page,
        pagination.page_size,
        total_items,
    );

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    params(
        ("id" = Uuid, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team found", body = TeamResponse),
        (status = 404, description = "Team not found", body = ExceptionDetails)
    ),
    tag = "teams"
)]
pub async fn get_team(
    State(db): State<Database>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, WebError> {
    let team = services::get_team(db.pool(), id).await?;

    Ok(Json(TeamResponse::from(team)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/teams",
    request_body = CreateTeamRequest,
    responses(
        (status = 201, description = "Team created successfully", body = TeamResponse),
        (status = 400, description = "Validation error", body = ExceptionDetails),
        (status = 409, description = "Team name already taken", body = ExceptionDetails)
    ),
    tag = "teams"
)]
pub async fn create_team(
    State(db): State<Database>,
    ApiJson(req): ApiJson<CreateTeamRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let team = services::create_team(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(team))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/teams/{id}",
    params(
        ("id" = Uuid, Path, description = "Team ID")
    ),
    request_body = UpdateTeamRequest,
    responses(
        (status = 200, description = "Team updated successfully", body = TeamResponse),
        (status = 400, description = "Validation error", body = ExceptionDetails),
        (status = 404, description = "Team not found", body = ExceptionDetails),
        (status = 409, description = "Team name already taken", body = ExceptionDetails)
    ),
    tag = "teams"
)]
pub async fn update_team(
    State(db): State<Database>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<UpdateTeamRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let updated = services::update_team(db.pool(), id, &req).await?;

    Ok(Json(TeamResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    params(
        ("id" = Uuid, Path, description = "Team ID")
    ),
    responses(
        (status = 204, description = "Team and its participants deleted"),
        (status = 404, description = "Team not found", body = ExceptionDetails),
        (status = 409, description = "Team still plays in matches", body = ExceptionDetails)
    ),
    tag = "teams"
)]
pub async fn delete_team(
    State(db): State<Database>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, WebError> {
    services::delete_team(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}/participants",
    params(
        ("id" = Uuid, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Members of the team", body = Vec<ParticipantResponse>),
        (status = 404, description = "Team not found", body = ExceptionDetails)
    ),
    tag = "teams"
)]
pub async fn list_team_participants(
    State(db): State<Database>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, WebError> {
    let participants = services::list_team_participants(db.pool(), id).await?;

    let response: Vec<ParticipantResponse> = participants
        .into_iter()
        .map(ParticipantResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}/matches",
    params(
        ("id" = Uuid, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Matches the team plays in", body = Vec<MatchResponse>),
        (status = 404, description = "Team not found", body = ExceptionDetails)
    ),
    tag = "teams"
)]
pub async fn list_team_matches(
    State(db): State<Database>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, WebError> {
    let matches = services::list_team_matches(db.pool(), id).await?;

    let response: Vec<MatchResponse> = matches.into_iter().map(MatchResponse::from).collect();

    Ok(Json(response).into_response())
}
