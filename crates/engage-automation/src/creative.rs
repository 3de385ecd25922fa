//! Creative mode: match a free-text campaign idea to an automation rule
//! and expand it into a fully configured campaign draft.

use chrono::{Duration, NaiveDate};
use tracing::info;

use engage_core::error::{EngageError, EngageResult};
use engage_core::types::{AutomationRule, CampaignDraft, CampaignSource, Channel};

use crate::rules::rule_catalog;

/// The expansion result plus the fields the rule filled in automatically,
/// for display in the creative-studio view.
#[derive(Debug, Clone)]
pub struct CreativePlan {
    pub rule_id: String,
    pub draft: CampaignDraft,
    pub auto_handled: Vec<String>,
}

pub struct CreativeModeMatcher {
    catalog: Vec<AutomationRule>,
}

impl Default for CreativeModeMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl CreativeModeMatcher {
    pub fn new() -> Self {
        Self { catalog: rule_catalog() }
    }

    #[cfg(test)]
    fn with_catalog(catalog: Vec<AutomationRule>) -> Self {
        Self { catalog }
    }

    /// Case-folds and trims the idea, then tests each rule's keywords as
    /// substrings in catalog declaration order. The first rule with at
    /// least one hit wins; no scoring, no heuristics.
    pub fn match_rule(&self, idea: &str) -> EngageResult<&AutomationRule> {
        let normalized = idea.trim().to_lowercase();
        self.catalog
            .iter()
            .find(|rule| rule.match_keywords.iter().any(|kw| normalized.contains(kw.as_str())))
            .ok_or_else(|| EngageError::NoMatch(idea.trim().to_string()))
    }

    /// Expands a matched rule into one campaign draft. The first cadence
    /// offset sets `next_send` relative to `today`; the full offset list is
    /// carried on the campaign as follow-up metadata rather than spawning
    /// one entity per offset.
    pub fn expand(&self, rule: &AutomationRule, idea: &str, today: NaiveDate) -> CampaignDraft {
        let idea = idea.trim();
        let first_offset = rule.cadence_offsets.first().copied().unwrap_or(0);
        CampaignDraft {
            name: format!("{}: {idea}", rule.id),
            segment: rule.segment.clone(),
            trigger: format!("Creative idea: {idea}"),
            channels: rule.channels.clone(),
            template: "Creation Studio".to_string(),
            next_send: today + Duration::days(i64::from(first_offset)),
            status: None,
            cadence_offsets: rule.cadence_offsets.clone(),
            ab_variants: variant_labels(rule.ab_variant_count),
            source: CampaignSource::Creative,
        }
    }

    /// Match then expand, recording what the rule auto-handled.
    pub fn plan(&self, idea: &str, today: NaiveDate) -> EngageResult<CreativePlan> {
        let rule = self.match_rule(idea)?;
        info!(rule = %rule.id, idea, "Creative idea matched automation rule");
        let draft = self.expand(rule, idea, today);

        let mut auto_handled = vec![
            format!("Segment: {}", rule.segment),
            format!("Cadence: {} days", join_offsets(&rule.cadence_offsets)),
            format!("Channel: {}", Channel::join(&rule.channels)),
        ];
        if rule.ab_variant_count > 0 {
            auto_handled.push(format!("A/B variants: {}", rule.ab_variant_count));
        }
        if let Some(length) = rule.video_length_secs {
            auto_handled.push(format!("Video length: {length}s"));
        }
        if let Some(format) = &rule.video_format {
            auto_handled.push(format!("Format: {format}"));
        }

        Ok(CreativePlan {
            rule_id: rule.id.clone(),
            draft,
            auto_handled,
        })
    }
}

fn variant_labels(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            if i < 26 {
                format!("Variant {}", (b'A' + i as u8) as char)
            } else {
                format!("Variant {}", i + 1)
            }
        })
        .collect()
}

fn join_offsets(offsets: &[u32]) -> String {
    offsets
        .iter()
        .map(|o| o.to_string())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 10).unwrap()
    }

    #[test]
    fn earliest_declared_rule_wins_the_tie_break() {
        let matcher = CreativeModeMatcher::new();
        // "demo" and "video" hit Demo_video, but "smb" and "cto" hit the
        // earlier SMB_CTO rule, which must win.
        let rule = matcher.match_rule("demo video for SMB CTOs").unwrap();
        assert_eq!(rule.id, "SMB_CTO");
    }

    #[test]
    fn matching_is_deterministic() {
        let matcher = CreativeModeMatcher::new();
        for _ in 0..3 {
            assert_eq!(matcher.match_rule("enterprise rollout").unwrap().id, "Enterprise");
        }
    }

    #[test]
    fn matching_case_folds_and_trims() {
        let matcher = CreativeModeMatcher::new();
        assert_eq!(matcher.match_rule("  ENTERPRISE push  ").unwrap().id, "Enterprise");
    }

    #[test]
    fn no_keyword_hit_is_a_no_match() {
        let matcher = CreativeModeMatcher::new();
        let err = matcher.match_rule("postcard blast for farmers").unwrap_err();
        assert!(matches!(err, EngageError::NoMatch(_)));
    }

    #[test]
    fn expand_materializes_rule_configuration() {
        let matcher = CreativeModeMatcher::new();
        let rule = matcher.match_rule("enterprise vp push").unwrap();
        let draft = matcher.expand(rule, "enterprise vp push", today());

        assert_eq!(draft.segment, "VP Sales");
        assert_eq!(draft.channels, vec![Channel::Email]);
        assert_eq!(draft.cadence_offsets, vec![0, 5, 14, 30]);
        assert_eq!(
            draft.ab_variants,
            vec!["Variant A", "Variant B", "Variant C"]
        );
        // First offset is 0, so the first send is today.
        assert_eq!(draft.next_send, today());
        assert_eq!(draft.source, CampaignSource::Creative);
        assert!(draft.trigger.contains("enterprise vp push"));
    }

    #[test]
    fn expand_respects_a_nonzero_first_offset() {
        let rule = AutomationRule {
            id: "Delayed".to_string(),
            match_keywords: vec!["later".to_string()],
            segment: "New Leads".to_string(),
            channels: vec![Channel::Email],
            cadence_offsets: vec![2, 9],
            ab_variant_count: 0,
            video_length_secs: None,
            video_format: None,
        };
        let matcher = CreativeModeMatcher::with_catalog(vec![rule]);
        let rule = matcher.match_rule("do it later").unwrap();
        let draft = matcher.expand(rule, "do it later", today());
        assert_eq!(draft.next_send, today() + Duration::days(2));
        assert_eq!(draft.cadence_offsets, vec![2, 9]);
    }

    #[test]
    fn plan_reports_auto_handled_fields() {
        let matcher = CreativeModeMatcher::new();
        let plan = matcher.plan("product demo recording", today()).unwrap();
        assert_eq!(plan.rule_id, "Demo_video");
        assert!(plan.auto_handled.contains(&"Segment: General Audience".to_string()));
        assert!(plan.auto_handled.contains(&"Cadence: 0-7 days".to_string()));
        assert!(plan.auto_handled.contains(&"A/B variants: 2".to_string()));
        assert!(plan.auto_handled.contains(&"Video length: 90s".to_string()));
        assert!(plan.auto_handled.contains(&"Format: MP4 vertical".to_string()));
    }
}
