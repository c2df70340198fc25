use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        participant::{CreateParticipantRequest, ParticipantResponse, UpdateParticipantRequest},
        scoring::{GoalResponse, PenaltyCardResponse},
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::{ExceptionDetails, WebError};
use crate::extract::{ApiJson, ApiPath};

use super::services;

#[utoipa::path(
    get,
    path = "/api/participants",
    responses(
        (status = 200, description = "List all participants", body = Vec<ParticipantResponse>)
    ),
    tag = "participants"
)]
pub async fn list_participants(State(db): State<Database>) -> Result<Response, WebError> {
    let participants = services::list_participants(db.pool()).await?;

    let response: Vec<ParticipantResponse> = participants
        .into_iter()
        .map(ParticipantResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/participants/{id}",
    params(
        ("id" = Uuid, Path, description = "Participant ID")
    ),
    responses(
        (status = 200, description = "Participant found", body = ParticipantResponse),
        (status = 404, description = "Participant not found", body = ExceptionDetails)
    ),
    tag = "participants"
)]
pub async fn get_participant(
    State(db): State<Database>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, WebError> {
    let participant = services::get_participant(db.pool(), id).await?;

    Ok(Json(ParticipantResponse::from(participant)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/participants",
    request_body = CreateParticipantRequest,
    responses(
        (status = 201, description = "Participant created successfully", body = ParticipantResponse),
        (status = 400, description = "Validation error", body = ExceptionDetails),
        (status = 404, description = "Team not found", body = ExceptionDetails)
    ),
    tag = "participants"
)]
pub async fn create_participant(
    State(db): State<Database>,
    ApiJson(req): ApiJson<CreateParticipantRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let participant = services::create_participant(db.pool(), &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(ParticipantResponse::from(participant)),
    )
        .into_response())
}

#[utoipa::path(
    put,
    path = "/api/participants/{id}",
    params(
        ("id" = Uuid, Path, description = "Participant ID")
    ),
    request_body = UpdateParticipantRequest,
    responses(
        (status = 200, description = "Participant updated successfully", body = ParticipantResponse),
        (status = 400, description = "Validation error", body = ExceptionDetails),
        (status = 404, description = "Participant or team not found", body = ExceptionDetails),
        (status = 422, description = "Participant is tied to matches the new team does not play", body = ExceptionDetails)
    ),
    tag = "participants"
)]
pub async fn update_participant(
    State(db): State<Database>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<UpdateParticipantRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let updated = services::update_participant(db.pool(), id, &req).await?;

    Ok(Json(ParticipantResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/participants/{id}",
    params(
        ("id" = Uuid, Path, description = "Participant ID")
    ),
    responses(
        (status = 204, description = "Participant deleted successfully"),
        (status = 404, description = "Participant not found", body = ExceptionDetails),
        (status = 409, description = "Participant still owns goals or penalty cards", body = ExceptionDetails)
    ),
    tag = "participants"
)]
pub async fn delete_participant(
    State(db): State<Database>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, WebError> {
    services::delete_participant(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/participants/{id}/goals",
    params(
        ("id" = Uuid, Path, description = "Participant ID")
    ),
    responses(
        (status = 200, description = "Goals scored by the participant", body = Vec<GoalResponse>),
        (status = 404, description = "Participant not found", body = ExceptionDetails)
    ),
    tag = "participants"
)]
pub async fn list_participant_goals(
    State(db): State<Database>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, WebError> {
    let goals = services::list_participant_goals(db.pool(), id).await?;

    let response: Vec<GoalResponse> = goals.into_iter().map(GoalResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/participants/{id}/cards",
    params(
        ("id" = Uuid, Path, description = "Participant ID")
    ),
    responses(
        (status = 200, description = "Penalty cards received by the participant", body = Vec<PenaltyCardResponse>),
        (status = 404, description = "Participant not found", body = ExceptionDetails)
    ),
    tag = "participants"
)]
pub async fn list_participant_cards(
    State(db): State<Database>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, WebError> {
    let cards = services::list_participant_cards(db.pool(), id).await?;

    let response: Vec<PenaltyCardResponse> =
        cards.into_iter().map(PenaltyCardResponse::from).collect();

    Ok(Json(response).into_response())
}
