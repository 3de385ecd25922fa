//! Campaign automation and rule-matching engine.
//!
//! Every generation path (manual add, strategy, creative mode) funnels
//! through [`repository::CampaignRepository::add`], so there is exactly one
//! lifecycle implementation regardless of where a campaign came from.

pub mod creative;
pub mod repository;
pub mod rules;
pub mod strategy;

pub use creative::{CreativeModeMatcher, CreativePlan};
pub use repository::{parse_next_send, CampaignRepository};
pub use rules::rule_catalog;
pub use strategy::{Strategy, StrategyEngine};
