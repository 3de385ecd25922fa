//! Bundled canonical sample document, restored by `reset_to_sample`.

use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

use engage_core::types::{
    AbTestResult, ActionItem, AnalyticsSummary, BackendService, Campaign, CampaignSource,
    CampaignStatus, Channel, Connector, CreationTemplate, DatabaseHealth, FeedbackForm,
    HealthStatus, Integration, Profile, Segment, StateDocument,
};

/// Builds the sample state document with campaign dates anchored to `today`.
pub fn sample_document(today: NaiveDate) -> StateDocument {
    let tomorrow = today + Duration::days(1);
    StateDocument {
        profile: Profile {
            business_name: "Acme Components".to_string(),
            owner: "You".to_string(),
        },
        segments: vec![
            segment("New Leads", &["Created < 30 days", "Matches ICP industries"], 34),
            segment("Active Customers", &["Touched product in last 14 days"], 18),
            segment("Dormant Accounts", &["No activity > 30 days"], 12),
            segment("Tech Leads", &["Title contains CTO or Tech Lead", "Company < 200 employees"], 21),
            segment("VP Sales", &["Title contains VP", "Enterprise account tier"], 9),
            segment("General Audience", &["Any engaged contact"], 64),
        ],
        campaigns: vec![
            Campaign {
                id: Uuid::new_v4(),
                name: "Onboarding Drip".to_string(),
                segment: "New Leads".to_string(),
                trigger: "Sign-up form".to_string(),
                channels: vec![Channel::Email],
                template: "Welcome Series".to_string(),
                next_send: tomorrow,
                status: CampaignStatus::Scheduled,
                cadence_offsets: Vec::new(),
                ab_variants: Vec::new(),
                source: CampaignSource::Manual,
                created_at: Utc::now(),
            },
            Campaign {
                id: Uuid::new_v4(),
                name: "Win-back Sequence".to_string(),
                segment: "Dormant Accounts".to_string(),
                trigger: "Inactivity 30d".to_string(),
                channels: vec![Channel::Email],
                template: "Re-engagement".to_string(),
                next_send: tomorrow,
                status: CampaignStatus::Ready,
                cadence_offsets: Vec::new(),
                ab_variants: Vec::new(),
                source: CampaignSource::Manual,
                created_at: Utc::now(),
            },
            Campaign {
                id: Uuid::new_v4(),
                name: "Post-demo Follow-up".to_string(),
                segment: "Active Customers".to_string(),
                trigger: "Demo completed".to_string(),
                channels: vec![Channel::Email, Channel::Call],
                template: "Demo Recap".to_string(),
                next_send: today,
                status: CampaignStatus::Running,
                cadence_offsets: Vec::new(),
                ab_variants: Vec::new(),
                source: CampaignSource::Manual,
                created_at: Utc::now(),
            },
        ],
        templates: vec![
            CreationTemplate {
                name: "Welcome Series".to_string(),
                medium: "Email".to_string(),
                purpose: "Onboarding".to_string(),
                last_updated: today,
            },
            CreationTemplate {
                name: "Re-engagement".to_string(),
                medium: "Email".to_string(),
                purpose: "Win-back".to_string(),
                last_updated: today,
            },
            CreationTemplate {
                name: "Product Tour Deck".to_string(),
                medium: "Presentation".to_string(),
                purpose: "Sales enablement".to_string(),
                last_updated: today,
            },
        ],
        integrations: vec![
            Integration {
                name: "CRM (HubSpot)".to_string(),
                status: HealthStatus::Connected,
                detail: "API token valid".to_string(),
            },
            Integration {
                name: "Email (SendGrid)".to_string(),
                status: HealthStatus::Connected,
                detail: "Sender verified".to_string(),
            },
            Integration {
                name: "Social (LinkedIn)".to_string(),
                status: HealthStatus::Pending,
                detail: "OAuth to finish".to_string(),
            },
        ],
        connectors: vec![
            Connector {
                name: "HubSpot contacts".to_string(),
                status: HealthStatus::Connected,
                last_sync: Some(today),
                detail: "Contacts + deals".to_string(),
            },
            Connector {
                name: "LinkedIn Ads".to_string(),
                status: HealthStatus::Pending,
                last_sync: None,
                detail: "Finish OAuth to pull audiences".to_string(),
            },
            Connector {
                name: "SendGrid events".to_string(),
                status: HealthStatus::Connected,
                last_sync: Some(today),
                detail: "Bounces + clicks ingested".to_string(),
            },
        ],
        backend: vec![
            BackendService {
                service: "Engagement API".to_string(),
                status: HealthStatus::Healthy,
                latency_ms: 180,
                error_rate: "0.2%".to_string(),
                version: "v1.4.2".to_string(),
            },
            BackendService {
                service: "Automation Worker".to_string(),
                status: HealthStatus::Degraded,
                latency_ms: 420,
                error_rate: "1.1%".to_string(),
                version: "v1.3.9".to_string(),
            },
        ],
        databases: vec![
            DatabaseHealth {
                name: "Postgres".to_string(),
                role: "Primary".to_string(),
                status: HealthStatus::Healthy,
                storage_gb: 12.4,
                connections: 58,
            },
            DatabaseHealth {
                name: "Redis".to_string(),
                role: "Cache".to_string(),
                status: HealthStatus::Healthy,
                storage_gb: 1.1,
                connections: 14,
            },
        ],
        analytics: AnalyticsSummary {
            open_rate: 0.46,
            click_rate: 0.23,
            reply_rate: 0.14,
            conversions: 5,
            ab_tests: vec![
                AbTestResult {
                    name: "CTA copy".to_string(),
                    winner: "Book a call".to_string(),
                    uplift: 0.12,
                },
                AbTestResult {
                    name: "Send time".to_string(),
                    winner: "09:00".to_string(),
                    uplift: 0.08,
                },
            ],
        },
        feedback: vec![
            FeedbackForm {
                name: "Post-demo pulse".to_string(),
                question: "How clear was the value prop?".to_string(),
                last_sent: today,
                responses: 12,
            },
            FeedbackForm {
                name: "Onboarding check-in".to_string(),
                question: "Did you activate the core workflow?".to_string(),
                last_sent: today,
                responses: 8,
            },
        ],
        actions: vec![
            ActionItem {
                title: "A/B test CTA for New Leads".to_string(),
                due: today,
                owner: "You".to_string(),
            },
            ActionItem {
                title: "Send nurture to Dormant Accounts".to_string(),
                due: tomorrow,
                owner: "You".to_string(),
            },
            ActionItem {
                title: "Sync CRM deal stages".to_string(),
                due: tomorrow,
                owner: "You".to_string(),
            },
        ],
    }
}

fn segment(name: &str, criteria: &[&str], size: u32) -> Segment {
    Segment {
        name: name.to_string(),
        criteria: criteria.iter().map(|c| c.to_string()).collect(),
        size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_segments_cover_every_automation_rule_target() {
        let doc = sample_document(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let names: Vec<&str> = doc.segments.iter().map(|s| s.name.as_str()).collect();
        for target in ["Tech Leads", "VP Sales", "General Audience", "New Leads"] {
            assert!(names.contains(&target), "missing segment {target}");
        }
    }

    #[test]
    fn sample_campaign_segments_resolve() {
        let doc = sample_document(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        for campaign in &doc.campaigns {
            assert!(
                doc.segments.iter().any(|s| s.name == campaign.segment),
                "campaign {} references unknown segment {}",
                campaign.name,
                campaign.segment
            );
        }
    }
}
