//! End-to-end flow: every generation path funnels through the same
//! repository add/validate/persist contract.

use chrono::NaiveDate;
use engage_automation::{
    parse_next_send, CampaignRepository, CreativeModeMatcher, Strategy, StrategyEngine,
};
use engage_core::types::{CampaignDraft, CampaignSource, CampaignStatus, Channel};
use engage_store::StateStore;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

#[test]
fn manual_strategy_and_creative_adds_share_one_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let store = StateStore::new(dir.path().join("state.json"));
    let mut doc = store.reset_to_sample().unwrap();
    let seeded = doc.campaigns.len();

    // Manual add.
    let mut repo = CampaignRepository::new(&mut doc, &store);
    let manual = repo
        .add(CampaignDraft::manual(
            "Partner nurture",
            "Active Customers",
            "",
            vec![Channel::Email],
            "QBR follow-up",
            parse_next_send("2025-01-15").unwrap(),
        ))
        .unwrap();
    assert_eq!(manual.status, CampaignStatus::Scheduled);

    // Strategy add.
    let strategy_draft =
        StrategyEngine::apply(Strategy::Abm, &repo.segments(), "New Leads", today()).unwrap();
    let generated = repo.add(strategy_draft).unwrap();
    assert_eq!(generated.segment, "New Leads");
    assert_eq!(generated.trigger, "High-value account identified");
    assert_eq!(generated.source, CampaignSource::Strategy);

    // Creative-mode add, exercising the declared tie-break.
    let matcher = CreativeModeMatcher::new();
    let plan = matcher.plan("demo video for SMB CTOs", today()).unwrap();
    assert_eq!(plan.rule_id, "SMB_CTO");
    let creative = repo.add(plan.draft).unwrap();
    assert_eq!(creative.segment, "Tech Leads");
    assert_eq!(creative.channels, vec![Channel::Email, Channel::LinkedIn]);
    assert_eq!(creative.cadence_offsets, vec![0, 3, 7]);

    // Ids are unique across every origin.
    let reloaded = store.load().unwrap();
    assert_eq!(reloaded.campaigns.len(), seeded + 3);
    let mut ids: Vec<_> = reloaded.campaigns.iter().map(|c| c.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), seeded + 3);
}

#[test]
fn no_match_falls_back_without_touching_state() {
    let dir = tempfile::tempdir().unwrap();
    let store = StateStore::new(dir.path().join("state.json"));
    let doc = store.reset_to_sample().unwrap();
    let before = doc.campaigns.len();

    let matcher = CreativeModeMatcher::new();
    assert!(matcher.plan("billboard on route 9", today()).is_err());

    assert_eq!(store.load().unwrap().campaigns.len(), before);
}
