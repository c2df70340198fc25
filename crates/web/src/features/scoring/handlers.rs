use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::scoring::{GoalResponse, IssueCardRequest, PenaltyCardResponse, RecordGoalRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::{ExceptionDetails, WebError};
use crate::extract::{ApiJson, ApiPath};

use super::services;

#[utoipa::path(
    get,
    path = "/api/goals/{id}",
    params(
        ("id" = Uuid, Path, description = "Goal ID")
    ),
    responses(
        (status = 200, description = "Goal found", body = GoalResponse),
        (status = 404, description = "Goal not found", body = ExceptionDetails)
    ),
    tag = "scoring"
)]
pub async fn get_goal(
    State(db): State<Database>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, WebError> {
    let goal = services::get_goal(db.pool(), id).await?;

    Ok(Json(GoalResponse::from(goal)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/cards/{id}",
    params(
        ("id" = Uuid, Path, description = "Penalty card ID")
    ),
    responses(
        (status = 200, description = "Penalty card found", body = PenaltyCardResponse),
        (status = 404, description = "Penalty card not found", body = ExceptionDetails)
    ),
    tag = "scoring"
)]
pub async fn get_card(
    State(db): State<Database>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, WebError> {
    let card = services::get_card(db.pool(), id).await?;

    Ok(Json(PenaltyCardResponse::from(card)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/matches/{id}/goals",
    params(
        ("id" = Uuid, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Goals of the match in order", body = Vec<GoalResponse>),
        (status = 404, description = "Match not found", body = ExceptionDetails)
    ),
    tag = "scoring"
)]
pub async fn list_match_goals(
    State(db): State<Database>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, WebError> {
    let goals = services::list_match_goals(db.pool(), id).await?;

    let response: Vec<GoalResponse> = goals.into_iter().map(GoalResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/matches/{id}/goals",
    params(
        ("id" = Uuid, Path, description = "Match ID")
    ),
    request_body = RecordGoalRequest,
    responses(
        (status = 201, description = "Goal recorded and score updated", body = GoalResponse),
        (status = 404, description = "Match or participant not found", body = ExceptionDetails),
        (status = 422, description = "Sport keeps no goals or scorer plays for neither team", body = ExceptionDetails)
    ),
    tag = "scoring"
)]
pub async fn record_goal(
    State(db): State<Database>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<RecordGoalRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let goal = services::record_goal(db.pool(), id, &req).await?;

    Ok((StatusCode::CREATED, Json(GoalResponse::from(goal))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/matches/{id}/cards",
    params(
        ("id" = Uuid, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Penalty cards of the match in order", body = Vec<PenaltyCardResponse>),
        (status = 404, description = "Match not found", body = ExceptionDetails)
    ),
    tag = "scoring"
)]
pub async fn list_match_cards(
    State(db): State<Database>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, WebError> {
    let cards = services::list_match_cards(db.pool(), id).await?;

    let response: Vec<PenaltyCardResponse> =
        cards.into_iter().map(PenaltyCardResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/matches/{id}/cards",
    params(
        ("id" = Uuid, Path, description = "Match ID")
    ),
    request_body = IssueCardRequest,
    responses(
        (status = 201, description = "Penalty card issued", body = PenaltyCardResponse),
        (status = 404, description = "Match or participant not found", body = ExceptionDetails),
        (status = 422, description = "Sport keeps no cards or participant plays for neither team", body = ExceptionDetails)
    ),
    tag = "scoring"
)]
pub async fn issue_card(
    State(db): State<Database>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<IssueCardRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let card = services::issue_card(db.pool(), id, &req).await?;

    Ok((StatusCode::CREATED, Json(PenaltyCardResponse::from(card))).into_response())
}
