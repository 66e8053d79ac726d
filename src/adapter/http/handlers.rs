//! Request handlers for the bets and OCR endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use tracing::{info, warn};

use super::ApiError;
use crate::app::stats::{build_report, PairReport};
use crate::app::AppState;
use crate::domain::{
    validate_pair, Bet, BetId, BetStatus, NewBet, OcrData, PairDraft, PairId,
};
use crate::error::Error;

/// `GET /bets` - all legs, newest first.
pub async fn list_bets(State(state): State<AppState>) -> Result<Json<Vec<Bet>>, ApiError> {
    Ok(Json(state.store.list().await?))
}

/// `GET /bets/:id`
pub async fn get_bet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Bet>, ApiError> {
    let bet = state
        .store
        .get(&BetId::from(id.clone()))
        .await?
        .ok_or(Error::NotFound { id })?;
    Ok(Json(bet))
}

/// `GET /bets/pair/:pair_id` - whatever legs exist for the pair.
pub async fn get_pair(
    State(state): State<AppState>,
    Path(pair_id): Path<String>,
) -> Result<Json<Vec<Bet>>, ApiError> {
    let legs = state.store.list_pair(&PairId::from(pair_id)).await?;
    Ok(Json(legs))
}

/// `POST /bets` - persist one leg. Legs of a pair arrive as two
/// sequential calls; a failed second call leaves a tolerated
/// incomplete pair, which is logged but never auto-repaired.
pub async fn create_bet(
    State(state): State<AppState>,
    Json(new): Json<NewBet>,
) -> Result<(StatusCode, Json<Bet>), ApiError> {
    let bet = Bet::from_new(new, Utc::now());
    state.store.insert(&bet).await.map_err(|e| {
        warn!(pair_id = %bet.pair_id, position = %bet.bet_position, error = %e,
            "leg insert failed; pair may be left incomplete");
        e
    })?;
    info!(id = %bet.id, pair_id = %bet.pair_id, position = %bet.bet_position, "leg created");
    Ok((StatusCode::CREATED, Json(bet)))
}

#[derive(Deserialize)]
pub struct StatusUpdate {
    /// Anything outside the four-value enum is rejected at
    /// deserialization.
    pub status: BetStatus,
}

/// `PUT /bets/:id/status`
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<StatusUpdate>,
) -> Result<StatusCode, ApiError> {
    let existed = state
        .store
        .update_status(&BetId::from(id.clone()), update.status)
        .await?;
    if existed {
        info!(id, status = %update.status, "leg status updated");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::NotFound { id }.into())
    }
}

/// `DELETE /bets/:id`
pub async fn delete_bet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete(&BetId::from(id.clone())).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::NotFound { id }.into())
    }
}

/// Verification payload: both legs as the user sees them on the
/// verification screen, all fields still strings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VerifyRequest {
    pub leg_a: LegFields,
    pub leg_b: LegFields,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegFields {
    pub bet_position: String,
    pub team_a: String,
    pub team_b: String,
    pub betting_house: String,
    pub bet_type: String,
    pub game_date: String,
    pub odds: String,
    pub stake: String,
    pub profit_percentage: String,
}

impl From<LegFields> for crate::domain::LegDraft {
    fn from(f: LegFields) -> Self {
        Self {
            bet_position: f.bet_position,
            team_a: f.team_a,
            team_b: f.team_b,
            betting_house: f.betting_house,
            bet_type: f.bet_type,
            game_date: f.game_date,
            odds: f.odds,
            stake: f.stake,
            profit_percentage: f.profit_percentage,
        }
    }
}

/// `POST /bets/verify` - run the pre-commit validator over a pair
/// draft. Returns 204 when clean, 422 with every field-keyed issue
/// otherwise. Nothing is persisted either way.
pub async fn verify_pair(Json(req): Json<VerifyRequest>) -> Result<StatusCode, ApiError> {
    let draft = PairDraft {
        leg_a: req.leg_a.into(),
        leg_b: req.leg_b.into(),
    };
    validate_pair(&draft).map_err(Error::from)?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub image_base64: String,
}

/// `POST /ocr/analyze` - extract structured slip data from an image.
pub async fn analyze_slip(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<OcrData>, ApiError> {
    let image = state.extractor.image_from_base64(&req.image_base64)?;
    let data = state.extractor.analyze(&image).await?;
    Ok(Json(data))
}

/// `POST /ocr/raw` - same extraction, rendered as plain text for
/// diagnostics.
pub async fn analyze_slip_raw(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<String, ApiError> {
    let image = state.extractor.image_from_base64(&req.image_base64)?;
    Ok(state.extractor.analyze_raw(&image).await?)
}

/// `GET /stats` - aggregate pair report.
pub async fn pair_stats(State(state): State<AppState>) -> Result<Json<PairReport>, ApiError> {
    let bets = state.store.list().await?;
    Ok(Json(build_report(&bets)))
}
