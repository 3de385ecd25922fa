use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngageError;

/// Campaign lifecycle status. Declarative: nothing in the engine advances
/// it on a clock, and every status is reachable from every other one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Scheduled,
    Ready,
    Running,
    Paused,
    Completed,
}

impl CampaignStatus {
    pub const ALL: [CampaignStatus; 5] = [
        CampaignStatus::Scheduled,
        CampaignStatus::Ready,
        CampaignStatus::Running,
        CampaignStatus::Paused,
        CampaignStatus::Completed,
    ];
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CampaignStatus::Scheduled => "scheduled",
            CampaignStatus::Ready => "ready",
            CampaignStatus::Running => "running",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

impl FromStr for CampaignStatus {
    type Err = EngageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scheduled" => Ok(CampaignStatus::Scheduled),
            "ready" => Ok(CampaignStatus::Ready),
            "running" => Ok(CampaignStatus::Running),
            "paused" => Ok(CampaignStatus::Paused),
            "completed" => Ok(CampaignStatus::Completed),
            other => Err(EngageError::InvalidStatus(other.to_string())),
        }
    }
}

/// Delivery channel for a campaign send.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Email,
    LinkedIn,
    Social,
    Video,
    Call,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Channel::Email => "Email",
            Channel::LinkedIn => "LinkedIn",
            Channel::Social => "Social",
            Channel::Video => "Video",
            Channel::Call => "Call",
        };
        f.write_str(s)
    }
}

impl FromStr for Channel {
    type Err = EngageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(Channel::Email),
            "linkedin" => Ok(Channel::LinkedIn),
            "social" => Ok(Channel::Social),
            "video" => Ok(Channel::Video),
            "call" | "call task" => Ok(Channel::Call),
            other => Err(EngageError::UnknownChannel(other.to_string())),
        }
    }
}

impl Channel {
    /// Parses a `+`-separated channel list, e.g. "Email+LinkedIn" or
    /// "Email + Call task". Order is preserved.
    pub fn parse_list(s: &str) -> Result<Vec<Channel>, EngageError> {
        s.split('+').map(Channel::from_str).collect()
    }

    pub fn join(channels: &[Channel]) -> String {
        channels
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join("+")
    }
}

/// How a campaign entered the collection. Strategy and creative-mode adds
/// funnel through the same repository path as manual adds.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CampaignSource {
    #[default]
    Manual,
    Strategy,
    Creative,
}

/// A scheduled engagement action targeting a segment through one or more
/// channels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: Uuid,
    pub name: String,
    /// Name of a segment that must resolve in the segment registry.
    pub segment: String,
    pub trigger: String,
    pub channels: Vec<Channel>,
    pub template: String,
    pub next_send: NaiveDate,
    pub status: CampaignStatus,
    /// Day offsets for follow-up sends relative to campaign start.
    /// Empty for manual adds.
    #[serde(default)]
    pub cadence_offsets: Vec<u32>,
    /// Ordered A/B variant labels, empty when no split test was requested.
    #[serde(default)]
    pub ab_variants: Vec<String>,
    #[serde(default)]
    pub source: CampaignSource,
    pub created_at: DateTime<Utc>,
}

/// Construction request accepted by the campaign repository from every
/// entry point (manual add, strategy, creative mode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignDraft {
    pub name: String,
    pub segment: String,
    pub trigger: String,
    pub channels: Vec<Channel>,
    pub template: String,
    pub next_send: NaiveDate,
    pub status: Option<CampaignStatus>,
    pub cadence_offsets: Vec<u32>,
    pub ab_variants: Vec<String>,
    pub source: CampaignSource,
}

impl CampaignDraft {
    pub fn manual(
        name: impl Into<String>,
        segment: impl Into<String>,
        trigger: impl Into<String>,
        channels: Vec<Channel>,
        template: impl Into<String>,
        next_send: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            segment: segment.into(),
            trigger: trigger.into(),
            channels,
            template: template.into(),
            next_send,
            status: None,
            cadence_offsets: Vec::new(),
            ab_variants: Vec::new(),
            source: CampaignSource::Manual,
        }
    }
}

/// A named group of customers sharing engagement criteria. Read-only to the
/// automation engine; maintained by a separate segment-management surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub name: String,
    pub criteria: Vec<String>,
    pub size: u32,
}

/// Predefined creative-mode configuration mapping an idea pattern to a
/// ready-made campaign setup. Fixed catalog, loaded once, never mutated.
#[derive(Debug, Clone)]
pub struct AutomationRule {
    pub id: String,
    pub match_keywords: Vec<String>,
    pub segment: String,
    pub channels: Vec<Channel>,
    pub cadence_offsets: Vec<u32>,
    pub ab_variant_count: usize,
    pub video_length_secs: Option<u32>,
    pub video_format: Option<String>,
}

// ─── Dashboard / ancillary state ────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub business_name: String,
    pub owner: String,
}

/// Shared status vocabulary for connectors, integrations, services and
/// databases on the dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Connected,
    Pending,
    Healthy,
    Degraded,
    Maintenance,
    Offline,
    Failed,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HealthStatus::Connected => "Connected",
            HealthStatus::Pending => "Pending",
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Degraded => "Degraded",
            HealthStatus::Maintenance => "Maintenance",
            HealthStatus::Offline => "Offline",
            HealthStatus::Failed => "Failed",
        };
        f.write_str(s)
    }
}

/// Creation-studio template available to campaigns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreationTemplate {
    pub name: String,
    pub medium: String,
    pub purpose: String,
    pub last_updated: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Integration {
    pub name: String,
    pub status: HealthStatus,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connector {
    pub name: String,
    pub status: HealthStatus,
    pub last_sync: Option<NaiveDate>,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendService {
    pub service: String,
    pub status: HealthStatus,
    pub latency_ms: u32,
    pub error_rate: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseHealth {
    pub name: String,
    pub role: String,
    pub status: HealthStatus,
    pub storage_gb: f64,
    pub connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbTestResult {
    pub name: String,
    pub winner: String,
    pub uplift: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub open_rate: f64,
    pub click_rate: f64,
    pub reply_rate: f64,
    pub conversions: u32,
    pub ab_tests: Vec<AbTestResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackForm {
    pub name: String,
    pub question: String,
    pub last_sent: NaiveDate,
    pub responses: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionItem {
    pub title: String,
    pub due: NaiveDate,
    pub owner: String,
}

/// The single persisted state document. Collections keep insertion order;
/// that order is the canonical listing order everywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateDocument {
    pub profile: Profile,
    pub segments: Vec<Segment>,
    pub campaigns: Vec<Campaign>,
    pub templates: Vec<CreationTemplate>,
    pub integrations: Vec<Integration>,
    pub connectors: Vec<Connector>,
    pub backend: Vec<BackendService>,
    pub databases: Vec<DatabaseHealth>,
    pub analytics: AnalyticsSummary,
    pub feedback: Vec<FeedbackForm>,
    pub actions: Vec<ActionItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_from_str() {
        for status in CampaignStatus::ALL {
            assert_eq!(status.to_string().parse::<CampaignStatus>().unwrap(), status);
        }
    }

    #[test]
    fn status_rejects_unknown_value() {
        let err = "archived".parse::<CampaignStatus>().unwrap_err();
        assert!(matches!(err, EngageError::InvalidStatus(_)));
    }

    #[test]
    fn channel_list_parses_plus_separated_spellings() {
        let channels = Channel::parse_list("Email + Call task").unwrap();
        assert_eq!(channels, vec![Channel::Email, Channel::Call]);

        let channels = Channel::parse_list("Email+LinkedIn").unwrap();
        assert_eq!(channels, vec![Channel::Email, Channel::LinkedIn]);
    }

    #[test]
    fn channel_list_rejects_unknown_channel() {
        let err = Channel::parse_list("Email+Carrier pigeon").unwrap_err();
        assert!(matches!(err, EngageError::UnknownChannel(_)));
    }
}
