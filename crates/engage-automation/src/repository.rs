//! CRUD and lifecycle transitions over the campaign collection.

use chrono::{NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use engage_core::error::{EngageError, EngageResult};
use engage_core::types::{Campaign, CampaignDraft, CampaignStatus, StateDocument};
use engage_store::{SegmentRegistry, StateStore};

/// Parses a `YYYY-MM-DD` next-send date at the command boundary.
pub fn parse_next_send(raw: &str) -> EngageResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| EngageError::InvalidDate(raw.to_string()))
}

/// Exclusive owner of the mutable campaign collection inside the state
/// document. Holds the document by reference for one invocation; every
/// mutating operation validates first, then persists exactly once.
pub struct CampaignRepository<'a> {
    doc: &'a mut StateDocument,
    store: &'a StateStore,
}

impl<'a> CampaignRepository<'a> {
    pub fn new(doc: &'a mut StateDocument, store: &'a StateStore) -> Self {
        Self { doc, store }
    }

    /// Validates the draft, assigns a fresh id, appends it to the
    /// collection (insertion order is the canonical listing order) and
    /// persists the document.
    pub fn add(&mut self, draft: CampaignDraft) -> EngageResult<Campaign> {
        if draft.name.trim().is_empty() {
            return Err(EngageError::Validation("campaign name is empty".to_string()));
        }
        if draft.channels.is_empty() {
            return Err(EngageError::Validation(format!(
                "campaign {:?} has no channel",
                draft.name
            )));
        }
        let registry = SegmentRegistry::new(&self.doc.segments);
        if !registry.contains(&draft.segment) {
            return Err(EngageError::UnknownSegment(draft.segment));
        }

        let campaign = Campaign {
            id: Uuid::new_v4(),
            name: draft.name,
            segment: draft.segment,
            trigger: draft.trigger,
            channels: draft.channels,
            template: draft.template,
            next_send: draft.next_send,
            status: draft.status.unwrap_or(CampaignStatus::Scheduled),
            cadence_offsets: draft.cadence_offsets,
            ab_variants: draft.ab_variants,
            source: draft.source,
            created_at: Utc::now(),
        };
        info!(
            id = %campaign.id,
            name = %campaign.name,
            segment = %campaign.segment,
            ?campaign.source,
            "Adding campaign"
        );
        self.doc.campaigns.push(campaign.clone());
        self.store.save(self.doc)?;
        Ok(campaign)
    }

    /// Moves a campaign to any of the five statuses. No transition graph
    /// is enforced; an operator may pause, resume or reschedule at will.
    pub fn update_status(&mut self, id: Uuid, status: CampaignStatus) -> EngageResult<Campaign> {
        let campaign = self
            .doc
            .campaigns
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(EngageError::NotFound(id))?;
        info!(%id, from = %campaign.status, to = %status, "Updating campaign status");
        campaign.status = status;
        let updated = campaign.clone();
        self.store.save(self.doc)?;
        Ok(updated)
    }

    /// Campaigns in stored order, optionally filtered.
    pub fn list(
        &self,
        segment: Option<&str>,
        status: Option<CampaignStatus>,
    ) -> Vec<&Campaign> {
        self.doc
            .campaigns
            .iter()
            .filter(|c| segment.map_or(true, |s| c.segment == s))
            .filter(|c| status.map_or(true, |s| c.status == s))
            .collect()
    }

    pub fn get(&self, id: Uuid) -> EngageResult<&Campaign> {
        self.doc
            .campaigns
            .iter()
            .find(|c| c.id == id)
            .ok_or(EngageError::NotFound(id))
    }

    pub fn segments(&self) -> SegmentRegistry<'_> {
        SegmentRegistry::new(&self.doc.segments)
    }
}
