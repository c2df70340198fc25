//! Routes a sport code to the match handling for that sport.
//!
//! Every sport shares the `matches` table; the discriminator column picks the variant.
//! The dispatch table below decides which child records a sport keeps and how the
//! tagged [`MatchDetails`] is assembled from them.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::matches::{CreateMatchRequest, UpdateMatchRequest, validate_schedule};
use crate::dto::scoring::{IssueCardRequest, RecordGoalRequest};
use crate::error::{Result, StorageError};
use crate::models::{Goal, Match, MatchDetails, MatchStatus, PenaltyCard, Sport};
use crate::repository::event::SportEventRepository;
use crate::repository::goal::{GoalRepository, Side};
use crate::repository::matches::{MatchFields, MatchRepository};
use crate::repository::participant::ParticipantRepository;
use crate::repository::penalty_card::PenaltyCardRepository;
use crate::repository::team::TeamRepository;

/// How matches of one sport are stored and assembled
#[derive(Debug)]
pub struct SportHandler {
    pub sport: Sport,
    pub records_goals: bool,
    pub records_cards: bool,
    assemble: fn(Vec<Goal>, Vec<PenaltyCard>) -> MatchDetails,
}

impl SportHandler {
    /// Discriminator stored on the match row
    pub fn discriminator(&self) -> &'static str {
        self.sport.as_str()
    }

    pub fn assemble(&self, goals: Vec<Goal>, cards: Vec<PenaltyCard>) -> MatchDetails {
        (self.assemble)(goals, cards)
    }
}

fn futsal(goals: Vec<Goal>, penalty_cards: Vec<PenaltyCard>) -> MatchDetails {
    MatchDetails::Futsal {
        goals,
        penalty_cards,
    }
}

fn handball(goals: Vec<Goal>, penalty_cards: Vec<PenaltyCard>) -> MatchDetails {
    MatchDetails::Handball {
        goals,
        penalty_cards,
    }
}

fn basketball(_: Vec<Goal>, penalty_cards: Vec<PenaltyCard>) -> MatchDetails {
    MatchDetails::Basketball { penalty_cards }
}

fn volleyball(_: Vec<Goal>, _: Vec<PenaltyCard>) -> MatchDetails {
    MatchDetails::Volleyball
}

fn table_tennis(_: Vec<Goal>, _: Vec<PenaltyCard>) -> MatchDetails {
    MatchDetails::TableTennis
}

fn chess(_: Vec<Goal>, _: Vec<PenaltyCard>) -> MatchDetails {
    MatchDetails::Chess
}

static FUTSAL: SportHandler = SportHandler {
    sport: Sport::Futsal,
    records_goals: true,
    records_cards: true,
    assemble: futsal,
};

static HANDBALL: SportHandler = SportHandler {
    sport: Sport::Handball,
    records_goals: true,
    records_cards: true,
    assemble: handball,
};

static BASKETBALL: SportHandler = SportHandler {
    sport: Sport::Basketball,
    records_goals: false,
    records_cards: true,
    assemble: basketball,
};

static VOLLEYBALL: SportHandler = SportHandler {
    sport: Sport::Volleyball,
    records_goals: false,
    records_cards: false,
    assemble: volleyball,
};

static TABLE_TENNIS: SportHandler = SportHandler {
    sport: Sport::TableTennis,
    records_goals: false,
    records_cards: false,
    assemble: table_tennis,
};

static CHESS: SportHandler = SportHandler {
    sport: Sport::Chess,
    records_goals: false,
    records_cards: false,
    assemble: chess,
};

pub fn handler_for(sport: Sport) -> &'static SportHandler {
    match sport {
        Sport::Futsal => &FUTSAL,
        Sport::Handball => &HANDBALL,
        Sport::Basketball => &BASKETBALL,
        Sport::Volleyball => &VOLLEYBALL,
        Sport::TableTennis => &TABLE_TENNIS,
        Sport::Chess => &CHESS,
    }
}

/// Resolve a sport code, failing with `UnsupportedSport` on anything unknown
pub fn resolve(code: &str) -> Result<&'static SportHandler> {
    code.parse::<Sport>()
        .map(handler_for)
        .map_err(|_| StorageError::UnsupportedSport(code.to_string()))
}

pub struct MatchMediator<'a> {
    pool: &'a PgPool,
}

impl<'a> MatchMediator<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a match of the sport named by `sport_code`
    pub async fn create(&self, sport_code: &str, req: &CreateMatchRequest) -> Result<Match> {
        let handler = resolve(sport_code)?;
        req.validate_schedule()
            .map_err(|msg| StorageError::Unprocessable(msg.to_string()))?;

        let teams = TeamRepository::new(self.pool);
        teams.find_by_id(req.team_a_id).await?;
        teams.find_by_id(req.team_b_id).await?;

        self.check_roster(req.team_a_id, req.team_b_id, &req.participant_ids)
            .await?;
        if let Some(event_id) = req.sport_event_id {
            self.check_event(event_id, handler.sport).await?;
        }

        let fields = MatchFields {
            team_a_id: req.team_a_id,
            team_b_id: req.team_b_id,
            score_a: req.score_a.unwrap_or(0),
            score_b: req.score_b.unwrap_or(0),
            modality: req.modality,
            status: req.status,
            start_time: req.start_time,
            end_time: req.end_time,
            sport_event_id: req.sport_event_id,
        };

        let created = MatchRepository::new(self.pool)
            .insert(handler.sport, &fields, &req.participant_ids)
            .await?;

        tracing::info!(
            match_id = %created.match_id,
            sport = handler.discriminator(),
            "match created"
        );

        Ok(created)
    }

    /// Stored discriminator of a match, e.g. `"CHESS"`
    pub async fn find_match_type_by_id(&self, id: Uuid) -> Result<String> {
        MatchRepository::new(self.pool).find_sport_by_id(id).await
    }

    /// Fetch a match through its sport; a match of another sport is reported as missing
    pub async fn find_for_sport(&self, sport_code: &str, id: Uuid) -> Result<Match> {
        let handler = resolve(sport_code)?;
        let repo = MatchRepository::new(self.pool);

        if repo.find_sport_by_id(id).await? != handler.discriminator() {
            return Err(StorageError::not_found(
                &format!("{} match", handler.discriminator()),
                id,
            ));
        }

        repo.find_by_id(id).await
    }

    pub async fn list_for_sport(&self, sport_code: &str) -> Result<Vec<Match>> {
        let handler = resolve(sport_code)?;
        MatchRepository::new(self.pool)
            .list_by_sport(handler.sport)
            .await
    }

    /// Sport specific records of a match, loaded according to the sport's handler
    pub async fn details(&self, m: &Match) -> Result<MatchDetails> {
        let handler = handler_for(m.sport);

        let goals = if handler.records_goals {
            GoalRepository::new(self.pool)
                .list_by_match(m.match_id)
                .await?
        } else {
            Vec::new()
        };
        let cards = if handler.records_cards {
            PenaltyCardRepository::new(self.pool)
                .list_by_match(m.match_id)
                .await?
        } else {
            Vec::new()
        };

        Ok(handler.assemble(goals, cards))
    }

    /// Apply a partial update; the sport of a match never changes
    pub async fn update(&self, id: Uuid, req: &UpdateMatchRequest) -> Result<Match> {
        let repo = MatchRepository::new(self.pool);
        let existing = repo.find_by_id(id).await?;

        let fields = MatchFields {
            team_a_id: req.team_a_id.unwrap_or(existing.team_a_id),
            team_b_id: req.team_b_id.unwrap_or(existing.team_b_id),
            score_a: req.score_a.unwrap_or(existing.score_a),
            score_b: req.score_b.unwrap_or(existing.score_b),
            modality: req.modality.unwrap_or(existing.modality),
            status: req.status.unwrap_or(existing.status),
            start_time: req.start_time.or(existing.start_time),
            end_time: req.end_time.or(existing.end_time),
            sport_event_id: req.sport_event_id.or(existing.sport_event_id),
        };

        validate_schedule(
            fields.team_a_id,
            fields.team_b_id,
            fields.start_time,
            fields.end_time,
        )
        .map_err(|msg| StorageError::Unprocessable(msg.to_string()))?;

        let teams = TeamRepository::new(self.pool);
        if req.team_a_id.is_some() {
            teams.find_by_id(fields.team_a_id).await?;
        }
        if req.team_b_id.is_some() {
            teams.find_by_id(fields.team_b_id).await?;
        }

        let roster = match &req.participant_ids {
            Some(ids) => ids.clone(),
            None if req.team_a_id.is_some() || req.team_b_id.is_some() => {
                repo.participant_ids(id).await?
            }
            None => Vec::new(),
        };
        self.check_roster(fields.team_a_id, fields.team_b_id, &roster)
            .await?;

        if let Some(event_id) = req.sport_event_id {
            self.check_event(event_id, existing.sport).await?;
        }

        repo.update(id, &fields, req.participant_ids.as_deref())
            .await
    }

    /// Delete a match together with its goals and cards
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        MatchRepository::new(self.pool).delete(id).await?;
        tracing::info!(match_id = %id, "match deleted");
        Ok(())
    }

    /// Record a goal for the scorer's side and bump that side's score
    pub async fn record_goal(&self, match_id: Uuid, req: &RecordGoalRequest) -> Result<Goal> {
        let m = MatchRepository::new(self.pool).find_by_id(match_id).await?;
        let handler = handler_for(m.sport);
        if !handler.records_goals {
            return Err(StorageError::Unprocessable(format!(
                "{} matches do not record goals",
                handler.discriminator()
            )));
        }

        let (team_id, side) = self.scoring_side(&m, req.participant_id).await?;
        let scored_at = req.scored_at.unwrap_or_else(|| Utc::now().naive_utc());

        GoalRepository::new(self.pool)
            .insert(match_id, req.participant_id, team_id, side, scored_at)
            .await
    }

    pub async fn issue_card(&self, match_id: Uuid, req: &IssueCardRequest) -> Result<PenaltyCard> {
        let m = MatchRepository::new(self.pool).find_by_id(match_id).await?;
        let handler = handler_for(m.sport);
        if !handler.records_cards {
            return Err(StorageError::Unprocessable(format!(
                "{} matches do not record penalty cards",
                handler.discriminator()
            )));
        }

        let (team_id, _) = self.scoring_side(&m, req.participant_id).await?;
        let issued_at = req.issued_at.unwrap_or_else(|| Utc::now().naive_utc());

        PenaltyCardRepository::new(self.pool)
            .insert(match_id, req.participant_id, team_id, req.color, issued_at)
            .await
    }

    pub async fn goals(&self, match_id: Uuid) -> Result<Vec<Goal>> {
        MatchRepository::new(self.pool).find_sport_by_id(match_id).await?;
        GoalRepository::new(self.pool).list_by_match(match_id).await
    }

    pub async fn cards(&self, match_id: Uuid) -> Result<Vec<PenaltyCard>> {
        MatchRepository::new(self.pool).find_sport_by_id(match_id).await?;
        PenaltyCardRepository::new(self.pool)
            .list_by_match(match_id)
            .await
    }

    /// Team and side a participant plays for in `m`
    async fn scoring_side(&self, m: &Match, participant_id: Uuid) -> Result<(Uuid, Side)> {
        if m.status == MatchStatus::Cancelled {
            return Err(StorageError::Unprocessable(
                "Cancelled matches do not accept new records".to_string(),
            ));
        }

        let participant = ParticipantRepository::new(self.pool)
            .find_by_id(participant_id)
            .await?;

        side_of(m, participant.team_id)
            .map(|side| (participant.team_id, side))
            .ok_or_else(|| {
                StorageError::Unprocessable(format!(
                    "Participant {} does not play for either team of match {}",
                    participant_id, m.match_id
                ))
            })
    }

    async fn check_roster(&self, team_a_id: Uuid, team_b_id: Uuid, ids: &[Uuid]) -> Result<()> {
        let participants = ParticipantRepository::new(self.pool).find_many(ids).await?;
        if let Some(outsider) = participants
            .iter()
            .find(|p| p.team_id != team_a_id && p.team_id != team_b_id)
        {
            return Err(StorageError::Unprocessable(format!(
                "Participant {} does not belong to either team",
                outsider.participant_id
            )));
        }
        Ok(())
    }

    async fn check_event(&self, event_id: Uuid, sport: Sport) -> Result<()> {
        let event = SportEventRepository::new(self.pool)
            .find_by_id(event_id)
            .await?;
        if event.sport != sport {
            return Err(StorageError::Unprocessable(format!(
                "Sport event {} is a {} event, not {}",
                event_id, event.sport, sport
            )));
        }
        Ok(())
    }
}

fn side_of(m: &Match, team_id: Uuid) -> Option<Side> {
    if team_id == m.team_a_id {
        Some(Side::A)
    } else if team_id == m.team_b_id {
        Some(Side::B)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MatchStatus, Modality};

    #[test]
    fn every_sport_resolves_to_its_own_discriminator() {
        for sport in Sport::ALL {
            let handler = resolve(sport.as_str()).unwrap();
            assert_eq!(handler.sport, sport);
            assert_eq!(handler.discriminator(), sport.as_str());
        }
        assert_eq!(resolve("CHESS").unwrap().discriminator(), "CHESS");
    }

    #[test]
    fn unknown_code_is_an_unsupported_modality() {
        let err = resolve("QUIDDITCH").unwrap_err();
        assert!(matches!(err, StorageError::UnsupportedSport(ref code) if code == "QUIDDITCH"));
    }

    #[test]
    fn capability_table() {
        let goals: Vec<Sport> = Sport::ALL
            .into_iter()
            .filter(|s| handler_for(*s).records_goals)
            .collect();
        assert_eq!(goals, vec![Sport::Futsal, Sport::Handball]);

        let cards: Vec<Sport> = Sport::ALL
            .into_iter()
            .filter(|s| handler_for(*s).records_cards)
            .collect();
        assert_eq!(cards, vec![Sport::Futsal, Sport::Handball, Sport::Basketball]);
    }

    #[test]
    fn assembled_details_match_the_handler_sport() {
        for sport in Sport::ALL {
            let details = handler_for(sport).assemble(Vec::new(), Vec::new());
            assert_eq!(details.sport(), sport);
        }
    }

    #[test]
    fn side_follows_team_membership() {
        let m = Match {
            match_id: Uuid::new_v4(),
            sport: Sport::Handball,
            team_a_id: Uuid::new_v4(),
            team_b_id: Uuid::new_v4(),
            score_a: 0,
            score_b: 0,
            modality: Modality::Feminine,
            status: MatchStatus::InProgress,
            start_time: None,
            end_time: None,
            sport_event_id: None,
            created_at: chrono::NaiveDateTime::default(),
        };
        assert_eq!(side_of(&m, m.team_a_id), Some(Side::A));
        assert_eq!(side_of(&m, m.team_b_id), Some(Side::B));
        assert_eq!(side_of(&m, Uuid::new_v4()), None);
    }
}

/// Round trips through Postgres; run with `cargo test -- --ignored` and `DATABASE_URL` set
#[cfg(test)]
mod persistence_tests {
    use super::*;
    use crate::dto::participant::{CreateParticipantRequest, UpdateParticipantRequest};
    use crate::dto::team::{CreateTeamRequest, UpdateTeamRequest};
    use crate::models::{CardColor, Modality, Participant, Team};

    async fn team(pool: &PgPool, name: &str) -> Team {
        TeamRepository::new(pool)
            .create(&CreateTeamRequest {
                name: name.to_string(),
                points: None,
            })
            .await
            .unwrap()
    }

    async fn participant(pool: &PgPool, team_id: Uuid, class_code: &str) -> Participant {
        ParticipantRepository::new(pool)
            .create(&CreateParticipantRequest {
                name: format!("Student {class_code}"),
                class_code: class_code.to_string(),
                team_id,
            })
            .await
            .unwrap()
    }

    fn request(team_a_id: Uuid, team_b_id: Uuid, participant_ids: Vec<Uuid>) -> CreateMatchRequest {
        CreateMatchRequest {
            team_a_id,
            team_b_id,
            modality: Modality::Mixed,
            status: MatchStatus::Scheduled,
            score_a: None,
            score_b: None,
            start_time: None,
            end_time: None,
            participant_ids,
            sport_event_id: None,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn chess_match_reports_its_type(pool: PgPool) {
        let home = team(&pool, "PAPA_LEGUAS").await;
        let away = team(&pool, "PICA_PAUS").await;
        let player = participant(&pool, home.team_id, "3-53").await;

        let mediator = MatchMediator::new(&pool);
        let created = mediator
            .create("CHESS", &request(home.team_id, away.team_id, vec![player.participant_id]))
            .await
            .unwrap();

        assert_eq!(
            mediator.find_match_type_by_id(created.match_id).await.unwrap(),
            "CHESS"
        );
        assert!(matches!(
            mediator.find_for_sport("FUTSAL", created.match_id).await,
            Err(StorageError::NotFound(_))
        ));
        assert!(matches!(
            mediator.details(&created).await.unwrap(),
            MatchDetails::Chess
        ));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn goals_bump_the_scorer_side_and_cascade_on_delete(pool: PgPool) {
        let home = team(&pool, "Home").await;
        let away = team(&pool, "Away").await;
        let scorer = participant(&pool, away.team_id, "2-11").await;

        let mediator = MatchMediator::new(&pool);
        let created = mediator
            .create("FUTSAL", &request(home.team_id, away.team_id, Vec::new()))
            .await
            .unwrap();

        let goal = mediator
            .record_goal(
                created.match_id,
                &RecordGoalRequest {
                    participant_id: scorer.participant_id,
                    scored_at: None,
                },
            )
            .await
            .unwrap();
        let card = mediator
            .issue_card(
                created.match_id,
                &IssueCardRequest {
                    participant_id: scorer.participant_id,
                    color: CardColor::Yellow,
                    issued_at: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(goal.team_id, away.team_id);

        let refreshed = MatchRepository::new(&pool)
            .find_by_id(created.match_id)
            .await
            .unwrap();
        assert_eq!((refreshed.score_a, refreshed.score_b), (0, 1));

        mediator.delete(created.match_id).await.unwrap();

        assert!(matches!(
            GoalRepository::new(&pool).find_by_id(goal.goal_id).await,
            Err(StorageError::NotFound(_))
        ));
        assert!(matches!(
            PenaltyCardRepository::new(&pool).find_by_id(card.card_id).await,
            Err(StorageError::NotFound(_))
        ));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn chess_rejects_goals(pool: PgPool) {
        let home = team(&pool, "Rooks").await;
        let away = team(&pool, "Bishops").await;
        let player = participant(&pool, home.team_id, "1-01").await;

        let mediator = MatchMediator::new(&pool);
        let created = mediator
            .create("CHESS", &request(home.team_id, away.team_id, Vec::new()))
            .await
            .unwrap();

        let err = mediator
            .record_goal(
                created.match_id,
                &RecordGoalRequest {
                    participant_id: player.participant_id,
                    scored_at: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Unprocessable(_)));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn duplicate_team_name_is_a_conflict(pool: PgPool) {
        team(&pool, "PAPA_LEGUAS").await;

        let err = TeamRepository::new(&pool)
            .create(&CreateTeamRequest {
                name: "PAPA_LEGUAS".to_string(),
                points: Some(3),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::ConstraintViolation(_)));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn every_sport_keeps_its_discriminator(pool: PgPool) {
        let home = team(&pool, "Home").await;
        let away = team(&pool, "Away").await;
        let mediator = MatchMediator::new(&pool);

        for sport in Sport::ALL {
            let created = mediator
                .create(sport.as_str(), &request(home.team_id, away.team_id, Vec::new()))
                .await
                .unwrap();

            assert_eq!(
                mediator.find_match_type_by_id(created.match_id).await.unwrap(),
                sport.as_str()
            );
            let fetched = MatchRepository::new(&pool)
                .find_by_id(created.match_id)
                .await
                .unwrap();
            assert_eq!(fetched.sport, sport);
            assert_eq!(mediator.details(&fetched).await.unwrap().sport(), sport);
        }

        assert_eq!(
            MatchRepository::new(&pool)
                .list_by_sport(Sport::TableTennis)
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn renaming_onto_a_taken_name_is_a_conflict(pool: PgPool) {
        team(&pool, "PAPA_LEGUAS").await;
        let other = team(&pool, "PICA_PAUS").await;

        let err = TeamRepository::new(&pool)
            .update(
                &other,
                &UpdateTeamRequest {
                    name: Some("PAPA_LEGUAS".to_string()),
                    points: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::ConstraintViolation(_)));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn team_playing_a_match_cannot_be_deleted(pool: PgPool) {
        let home = team(&pool, "Home").await;
        let away = team(&pool, "Away").await;
        MatchMediator::new(&pool)
            .create("VOLLEYBALL", &request(home.team_id, away.team_id, Vec::new()))
            .await
            .unwrap();

        let err = TeamRepository::new(&pool)
            .delete(home.team_id)
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::ConstraintViolation(_)));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn rostered_participant_only_moves_between_the_match_teams(pool: PgPool) {
        let home = team(&pool, "Home").await;
        let away = team(&pool, "Away").await;
        let outsider = team(&pool, "Outsider").await;
        let player = participant(&pool, home.team_id, "4-12").await;

        MatchMediator::new(&pool)
            .create(
                "FUTSAL",
                &request(home.team_id, away.team_id, vec![player.participant_id]),
            )
            .await
            .unwrap();

        let participants = ParticipantRepository::new(&pool);
        let err = participants
            .update(
                &player,
                &UpdateParticipantRequest {
                    name: None,
                    class_code: None,
                    team_id: Some(outsider.team_id),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Unprocessable(_)));

        let moved = participants
            .update(
                &player,
                &UpdateParticipantRequest {
                    name: None,
                    class_code: None,
                    team_id: Some(away.team_id),
                },
            )
            .await
            .unwrap();
        assert_eq!(moved.team_id, away.team_id);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn scorer_keeps_their_team_and_cannot_be_deleted(pool: PgPool) {
        let home = team(&pool, "Home").await;
        let away = team(&pool, "Away").await;
        let scorer = participant(&pool, home.team_id, "5-07").await;

        let mediator = MatchMediator::new(&pool);
        let created = mediator
            .create("HANDBALL", &request(home.team_id, away.team_id, Vec::new()))
            .await
            .unwrap();
        mediator
            .record_goal(
                created.match_id,
                &RecordGoalRequest {
                    participant_id: scorer.participant_id,
                    scored_at: None,
                },
            )
            .await
            .unwrap();

        let participants = ParticipantRepository::new(&pool);
        let err = participants
            .update(
                &scorer,
                &UpdateParticipantRequest {
                    name: None,
                    class_code: None,
                    team_id: Some(away.team_id),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Unprocessable(_)));

        let err = participants.delete(scorer.participant_id).await.unwrap_err();
        assert!(matches!(err, StorageError::ConstraintViolation(_)));

        let m = MatchRepository::new(&pool)
            .find_by_id(created.match_id)
            .await
            .unwrap();
        assert_eq!(m.score_a, 1);
        assert_eq!(mediator.goals(created.match_id).await.unwrap().len(), 1);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn repeated_roster_entry_is_not_swallowed(pool: PgPool) {
        let home = team(&pool, "Home").await;
        let away = team(&pool, "Away").await;
        let player = participant(&pool, home.team_id, "6-30").await;

        let fields = MatchFields {
            team_a_id: home.team_id,
            team_b_id: away.team_id,
            score_a: 0,
            score_b: 0,
            modality: Modality::Masculine,
            status: MatchStatus::Scheduled,
            start_time: None,
            end_time: None,
            sport_event_id: None,
        };
        let err = MatchRepository::new(&pool)
            .insert(
                Sport::Basketball,
                &fields,
                &[player.participant_id, player.participant_id],
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::ConstraintViolation(_)));
    }
}
