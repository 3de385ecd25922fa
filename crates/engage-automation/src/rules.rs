//! Creative-mode automation rule catalog.
//!
//! Fixed configuration, loaded once at process start. Declaration order is
//! load-bearing: when an idea matches the keywords of more than one rule,
//! the earliest-declared rule wins. `SMB_CTO` deliberately precedes
//! `Demo_video`, so "demo video for SMB CTOs" resolves to `SMB_CTO`.

use engage_core::types::{AutomationRule, Channel};

pub fn rule_catalog() -> Vec<AutomationRule> {
    vec![
        AutomationRule {
            id: "SMB_CTO".to_string(),
            match_keywords: keywords(&[
                "smb",
                "cto",
                "tech lead",
                "technical",
                "small business",
                "medium business",
            ]),
            segment: "Tech Leads".to_string(),
            channels: vec![Channel::Email, Channel::LinkedIn],
            cadence_offsets: vec![0, 3, 7],
            ab_variant_count: 0,
            video_length_secs: None,
            video_format: None,
        },
        AutomationRule {
            id: "Enterprise".to_string(),
            match_keywords: keywords(&["enterprise", "vp", "sales", "large", "corporation"]),
            segment: "VP Sales".to_string(),
            channels: vec![Channel::Email],
            cadence_offsets: vec![0, 5, 14, 30],
            ab_variant_count: 3,
            video_length_secs: None,
            video_format: None,
        },
        AutomationRule {
            id: "Demo_video".to_string(),
            match_keywords: keywords(&["demo", "video", "presentation", "recording", "mp4"]),
            segment: "General Audience".to_string(),
            channels: vec![Channel::Video],
            cadence_offsets: vec![0, 7],
            ab_variant_count: 2,
            video_length_secs: Some(90),
            video_format: Some("MP4 vertical".to_string()),
        },
    ]
}

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_is_fixed() {
        let ids: Vec<String> = rule_catalog().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["SMB_CTO", "Enterprise", "Demo_video"]);
    }

    #[test]
    fn keywords_are_lowercase() {
        for rule in rule_catalog() {
            for kw in &rule.match_keywords {
                assert_eq!(kw, &kw.to_lowercase(), "rule {} keyword {kw}", rule.id);
            }
        }
    }
}
