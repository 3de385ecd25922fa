//! Textual dashboard projection over the state document.
//!
//! Pure string building: nothing here reads or writes state, so every view
//! can be snapshot-tested against a fixed document.

pub mod table;

use chrono::{DateTime, Local, NaiveDate};

use engage_automation::CreativePlan;
use engage_core::types::{Campaign, Channel, StateDocument};
use table::TextTable;

const DASH: &str = "\u{2014}";

/// Full command-center view: header, campaign/segment/template tables,
/// analytics, then the health and feedback footer.
pub fn render_dashboard(doc: &StateDocument, now: DateTime<Local>) -> String {
    let mut out = String::new();
    out.push_str(&render_header(doc, now));
    out.push('\n');
    out.push_str(&campaign_table(doc).render());
    out.push('\n');
    out.push_str(&segment_table(doc).render());
    out.push('\n');
    out.push_str(&template_table(doc).render());
    out.push('\n');
    out.push_str(&render_analytics(doc));
    out.push('\n');
    out.push_str(&connector_table(doc).render());
    out.push('\n');
    out.push_str(&backend_table(doc).render());
    out.push('\n');
    out.push_str(&database_table(doc).render());
    out.push('\n');
    out.push_str(&feedback_table(doc).render());
    out.push('\n');
    out.push_str(&render_actions(doc));
    out
}

fn render_header(doc: &StateDocument, now: DateTime<Local>) -> String {
    format!(
        "== {} | B2B Engagement Command Center ==\n   {} | Updated {}\n",
        doc.profile.business_name,
        doc.profile.owner,
        now.format("%b %d, %Y %H:%M")
    )
}

fn campaign_table(doc: &StateDocument) -> TextTable {
    let mut table = TextTable::new(
        "Automation",
        &["Name", "Segment", "Trigger", "Channel", "Template", "Next", "Status"],
    );
    for campaign in &doc.campaigns {
        table.row(vec![
            campaign.name.clone(),
            campaign.segment.clone(),
            campaign.trigger.clone(),
            Channel::join(&campaign.channels),
            campaign.template.clone(),
            campaign.next_send.to_string(),
            campaign.status.to_string(),
        ]);
    }
    table
}

fn segment_table(doc: &StateDocument) -> TextTable {
    let mut table = TextTable::new("Segments", &["Name", "Criteria", "Size"]);
    for segment in &doc.segments {
        table.row(vec![
            segment.name.clone(),
            segment.criteria.join("; "),
            segment.size.to_string(),
        ]);
    }
    table
}

fn template_table(doc: &StateDocument) -> TextTable {
    let mut table = TextTable::new("Creation Studio", &["Template", "Medium", "Purpose", "Updated"]);
    for template in &doc.templates {
        table.row(vec![
            template.name.clone(),
            template.medium.clone(),
            template.purpose.clone(),
            template.last_updated.to_string(),
        ]);
    }
    table
}

fn connector_table(doc: &StateDocument) -> TextTable {
    let mut table = TextTable::new("Connectors", &["System", "Status", "Last Sync", "Detail"]);
    for connector in &doc.connectors {
        table.row(vec![
            connector.name.clone(),
            connector.status.to_string(),
            format_date(connector.last_sync),
            connector.detail.clone(),
        ]);
    }
    table
}

fn backend_table(doc: &StateDocument) -> TextTable {
    let mut table = TextTable::new(
        "Backend Services",
        &["Service", "Status", "Latency (ms)", "Errors", "Version"],
    );
    for service in &doc.backend {
        table.row(vec![
            service.service.clone(),
            service.status.to_string(),
            service.latency_ms.to_string(),
            service.error_rate.clone(),
            service.version.clone(),
        ]);
    }
    table
}

fn database_table(doc: &StateDocument) -> TextTable {
    let mut table = TextTable::new(
        "Databases",
        &["Name", "Role", "Status", "Storage (GB)", "Connections"],
    );
    for db in &doc.databases {
        table.row(vec![
            db.name.clone(),
            db.role.clone(),
            db.status.to_string(),
            format!("{:.1}", db.storage_gb),
            db.connections.to_string(),
        ]);
    }
    table
}

fn feedback_table(doc: &StateDocument) -> TextTable {
    let mut table = TextTable::new(
        "Feedback & Surveys",
        &["Name", "Question", "Last Sent", "Responses"],
    );
    for form in &doc.feedback {
        table.row(vec![
            form.name.clone(),
            form.question.clone(),
            form.last_sent.to_string(),
            form.responses.to_string(),
        ]);
    }
    table
}

fn render_analytics(doc: &StateDocument) -> String {
    let analytics = &doc.analytics;
    let mut out = String::from("Analytics & A/B Tests\n");
    out.push_str(&format!("  Open rate: {}\n", format_pct(analytics.open_rate)));
    out.push_str(&format!("  Click rate: {}\n", format_pct(analytics.click_rate)));
    out.push_str(&format!("  Reply rate: {}\n", format_pct(analytics.reply_rate)));
    out.push_str(&format!("  Conversions this week: {}\n", analytics.conversions));
    if !analytics.ab_tests.is_empty() {
        out.push_str("  A/B tests:\n");
        for test in &analytics.ab_tests {
            out.push_str(&format!(
                "    * {} winner: {} (+{})\n",
                test.name,
                test.winner,
                format_pct(test.uplift)
            ));
        }
    }
    out
}

fn render_actions(doc: &StateDocument) -> String {
    let mut out = String::from("Today's Focus\n");
    if doc.actions.is_empty() {
        out.push_str("  You're all set for today.\n");
        return out;
    }
    for item in &doc.actions {
        out.push_str(&format!("  * {} (due {})\n", item.title, item.due));
    }
    out
}

/// Filtered campaign listing with ids, for `list-campaigns`.
pub fn render_campaign_list(campaigns: &[&Campaign]) -> String {
    let mut table = TextTable::new(
        "Campaigns",
        &["Id", "Name", "Segment", "Channel", "Next", "Status"],
    );
    for campaign in campaigns {
        table.row(vec![
            campaign.id.to_string(),
            campaign.name.clone(),
            campaign.segment.clone(),
            Channel::join(&campaign.channels),
            campaign.next_send.to_string(),
            campaign.status.to_string(),
        ]);
    }
    table.render()
}

/// One-campaign summary printed after a successful add or status change.
pub fn render_campaign(campaign: &Campaign) -> String {
    let mut out = String::new();
    out.push_str(&format!("Campaign {}\n", campaign.id));
    out.push_str(&format!("  Name:      {}\n", campaign.name));
    out.push_str(&format!("  Segment:   {}\n", campaign.segment));
    out.push_str(&format!("  Trigger:   {}\n", or_dash(&campaign.trigger)));
    out.push_str(&format!("  Channel:   {}\n", Channel::join(&campaign.channels)));
    out.push_str(&format!("  Template:  {}\n", campaign.template));
    out.push_str(&format!("  Next send: {}\n", campaign.next_send));
    out.push_str(&format!("  Status:    {}\n", campaign.status));
    if !campaign.cadence_offsets.is_empty() {
        let offsets: Vec<String> =
            campaign.cadence_offsets.iter().map(|o| o.to_string()).collect();
        out.push_str(&format!("  Cadence:   {} days\n", offsets.join("-")));
    }
    if !campaign.ab_variants.is_empty() {
        out.push_str(&format!("  Variants:  {}\n", campaign.ab_variants.join(", ")));
    }
    out
}

/// Creative-studio view: the idea alongside what the matched rule handled
/// automatically.
pub fn render_creative_studio(idea: &str, plan: &CreativePlan) -> String {
    let mut out = String::from("== Creative Mode | Easy Campaign Creation ==\n\n");
    out.push_str("Creation Studio\n");
    out.push_str(&format!("  Your creative idea: {}\n", idea.trim()));
    out.push_str("  Script (editable):\n");
    out.push_str("    -> Opening hook: grab attention in the first 3 seconds\n");
    out.push_str("    -> Problem statement: what pain point are we solving?\n");
    out.push_str("    -> Solution demo: show the product in action\n");
    out.push_str("    -> Call to action: book a demo / start trial\n");
    out.push('\n');
    out.push_str("Auto-magic Status\n");
    out.push_str(&format!("  Rule matched: {}\n", plan.rule_id));
    out.push_str("  Auto-handled:\n");
    if plan.auto_handled.is_empty() {
        out.push_str("    (none)\n");
    }
    for item in &plan.auto_handled {
        out.push_str(&format!("    [x] {item}\n"));
    }
    out.push('\n');
    out.push_str("Segments, scheduling and syncs were handled automatically.\n");
    out
}

fn format_pct(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_else(|| DASH.to_string())
}

fn or_dash(s: &str) -> String {
    if s.is_empty() {
        DASH.to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use engage_automation::CreativeModeMatcher;
    use engage_store::sample;

    fn doc() -> StateDocument {
        sample::sample_document(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    #[test]
    fn dashboard_renders_every_section() {
        let now = Local.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
        let rendered = render_dashboard(&doc(), now);
        for section in [
            "Automation",
            "Segments",
            "Creation Studio",
            "Analytics & A/B Tests",
            "Connectors",
            "Backend Services",
            "Databases",
            "Feedback & Surveys",
            "Today's Focus",
        ] {
            assert!(rendered.contains(section), "missing section {section}");
        }
        assert!(rendered.contains("Acme Components"));
        assert!(rendered.contains("Onboarding Drip"));
        assert!(rendered.contains("Open rate: 46.0%"));
    }

    #[test]
    fn pending_connector_sync_renders_a_dash() {
        let now = Local.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
        let rendered = render_dashboard(&doc(), now);
        assert!(rendered.contains(DASH));
    }

    #[test]
    fn creative_studio_lists_auto_handled_fields() {
        let matcher = CreativeModeMatcher::new();
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let plan = matcher.plan("enterprise vp push", today).unwrap();
        let rendered = render_creative_studio("enterprise vp push", &plan);
        assert!(rendered.contains("Rule matched: Enterprise"));
        assert!(rendered.contains("[x] Segment: VP Sales"));
        assert!(rendered.contains("[x] A/B variants: 3"));
    }

    #[test]
    fn campaign_summary_shows_cadence_and_variants() {
        let matcher = CreativeModeMatcher::new();
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let plan = matcher.plan("demo recording", today).unwrap();
        let campaign = Campaign {
            id: uuid::Uuid::nil(),
            name: plan.draft.name.clone(),
            segment: plan.draft.segment.clone(),
            trigger: plan.draft.trigger.clone(),
            channels: plan.draft.channels.clone(),
            template: plan.draft.template.clone(),
            next_send: plan.draft.next_send,
            status: engage_core::types::CampaignStatus::Scheduled,
            cadence_offsets: plan.draft.cadence_offsets.clone(),
            ab_variants: plan.draft.ab_variants.clone(),
            source: plan.draft.source,
            created_at: chrono::Utc::now(),
        };
        let rendered = render_campaign(&campaign);
        assert!(rendered.contains("Cadence:   0-7 days"));
        assert!(rendered.contains("Variant A, Variant B"));
    }
}
