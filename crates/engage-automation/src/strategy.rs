//! Named marketing frameworks that auto-populate a campaign for a segment.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use engage_core::error::{EngageError, EngageResult};
use engage_core::types::{CampaignDraft, CampaignSource, Channel};
use engage_store::SegmentRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Abm,
    Aida,
    Race,
    SevenPs,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [Strategy::Abm, Strategy::Aida, Strategy::Race, Strategy::SevenPs];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Strategy::Abm => "ABM",
            Strategy::Aida => "AIDA",
            Strategy::Race => "RACE",
            Strategy::SevenPs => "7Ps",
        };
        f.write_str(s)
    }
}

impl FromStr for Strategy {
    type Err = EngageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abm" => Ok(Strategy::Abm),
            "aida" => Ok(Strategy::Aida),
            "race" => Ok(Strategy::Race),
            "7ps" => Ok(Strategy::SevenPs),
            other => Err(EngageError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Fixed construction parameters for one strategy. Pure configuration;
/// nothing here is computed.
struct StrategyProfile {
    trigger: &'static str,
    channels: &'static [Channel],
    template: &'static str,
    cadence_offsets: &'static [u32],
}

fn profile(strategy: Strategy) -> StrategyProfile {
    match strategy {
        Strategy::Abm => StrategyProfile {
            trigger: "High-value account identified",
            channels: &[Channel::LinkedIn, Channel::Email],
            template: "Account Playbook",
            cadence_offsets: &[0, 7, 21],
        },
        Strategy::Aida => StrategyProfile {
            trigger: "Funnel stage advance (Attention, Interest, Desire, Action)",
            channels: &[Channel::Email],
            template: "AIDA Nurture",
            cadence_offsets: &[0, 3, 7, 14],
        },
        Strategy::Race => StrategyProfile {
            trigger: "Reach-Act-Convert-Engage checkpoint",
            channels: &[Channel::Email, Channel::Social],
            template: "RACE Planner",
            cadence_offsets: &[0, 5, 10],
        },
        Strategy::SevenPs => StrategyProfile {
            trigger: "Holistic marketing mix review",
            channels: &[Channel::Email],
            template: "7Ps Mix Audit",
            cadence_offsets: &[0, 14],
        },
    }
}

/// Stateless transformer from `(strategy, segment)` to a construction
/// request. Referentially transparent: identical inputs yield
/// byte-identical drafts.
pub struct StrategyEngine;

impl StrategyEngine {
    pub fn apply(
        strategy: Strategy,
        registry: &SegmentRegistry<'_>,
        segment_name: &str,
        next_send: NaiveDate,
    ) -> EngageResult<CampaignDraft> {
        if !registry.contains(segment_name) {
            return Err(EngageError::UnknownSegment(segment_name.to_string()));
        }
        let profile = profile(strategy);
        Ok(CampaignDraft {
            name: format!("{strategy} outreach for {segment_name}"),
            segment: segment_name.to_string(),
            trigger: profile.trigger.to_string(),
            channels: profile.channels.to_vec(),
            template: profile.template.to_string(),
            next_send,
            status: None,
            cadence_offsets: profile.cadence_offsets.to_vec(),
            ab_variants: Vec::new(),
            source: CampaignSource::Strategy,
        })
    }
}
