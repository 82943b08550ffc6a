//! Post-combat flavor text from an external text service.
//!
//! Narration runs after a battle is resolved and only produces a string.
//! Any failure degrades to fixed fallback text.

use crate::character::player::Player;
use crate::combat::CombatOutcome;
use crate::config::Settings;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("narrative request failed: {0}")]
    RequestFailed(String),
    #[error("narrative response was invalid: {0}")]
    InvalidResponse(String),
    #[error("narrative response contained no text")]
    EmptyText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    pub race: String,
    pub level: u32,
    pub rank_index: u32,
}

impl PlayerSummary {
    pub fn from_player(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            race: player.race.name().to_string(),
            level: player.level,
            rank_index: player.rank_index,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleResult {
    Victory,
    Defeat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeRequest {
    pub player: PlayerSummary,
    pub opponent: String,
    pub outcome: BattleResult,
}

impl NarrativeRequest {
    pub fn new(player: &Player, opponent: &str, outcome: &CombatOutcome) -> Self {
        Self {
            player: PlayerSummary::from_player(player),
            opponent: opponent.to_string(),
            outcome: if outcome.won {
                BattleResult::Victory
            } else {
                BattleResult::Defeat
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct NarrativeResponse {
    text: String,
}

pub trait NarrativeService {
    fn narrate(&self, request: &NarrativeRequest) -> Result<String, NarrativeError>;
}

/// Blocking JSON client for a narrative endpoint.
pub struct HttpNarrativeService {
    agent: ureq::Agent,
    url: String,
}

impl HttpNarrativeService {
    pub fn new(url: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            url: url.trim_end_matches('/').to_string(),
        }
    }

    /// `None` when no endpoint is configured.
    pub fn from_settings(settings: &Settings) -> Option<Self> {
        settings
            .narrative_url
            .as_deref()
            .map(|url| Self::new(url, settings.narrative_timeout))
    }
}

impl NarrativeService for HttpNarrativeService {
    fn narrate(&self, request: &NarrativeRequest) -> Result<String, NarrativeError> {
        let response: NarrativeResponse = self
            .agent
            .post(&self.url)
            .set("User-Agent", "ironvale")
            .send_json(request)
            .map_err(|e| NarrativeError::RequestFailed(e.to_string()))?
            .into_json()
            .map_err(|e| NarrativeError::InvalidResponse(e.to_string()))?;

        let text = response.text.trim();
        if text.is_empty() {
            return Err(NarrativeError::EmptyText);
        }
        Ok(text.to_string())
    }
}

/// Always answers with the fallback text. Used when no endpoint is set.
pub struct FallbackNarrative;

impl NarrativeService for FallbackNarrative {
    fn narrate(&self, request: &NarrativeRequest) -> Result<String, NarrativeError> {
        Ok(fallback_text(request))
    }
}

/// HTTP client when configured, fixed text otherwise.
pub fn service_from_settings(settings: &Settings) -> Box<dyn NarrativeService> {
    match HttpNarrativeService::from_settings(settings) {
        Some(service) => Box::new(service),
        None => Box::new(FallbackNarrative),
    }
}

pub fn fallback_text(request: &NarrativeRequest) -> String {
    match request.outcome {
        BattleResult::Victory => format!(
            "{} stands victorious over {}.",
            request.player.name, request.opponent
        ),
        BattleResult::Defeat => format!(
            "{} falls before {}, but will rise again.",
            request.player.name, request.opponent
        ),
    }
}

/// Narration that never fails.
pub fn narrate_or_fallback(service: &dyn NarrativeService, request: &NarrativeRequest) -> String {
    match service.narrate(request) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(error = %err, "narrative service failed, using fallback text");
            fallback_text(request)
        }
    }
}
