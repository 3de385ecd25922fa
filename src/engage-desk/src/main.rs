//! Engage Desk — personal marketing-operations tracker.
//!
//! Command surface over the campaign automation engine and the textual
//! dashboard. Argument parsing lives here; semantics live in the library
//! crates.

use std::path::PathBuf;

use anyhow::bail;
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use uuid::Uuid;

use engage_automation::{
    parse_next_send, CampaignRepository, CreativeModeMatcher, Strategy, StrategyEngine,
};
use engage_core::config::AppConfig;
use engage_core::error::EngageError;
use engage_core::types::{CampaignDraft, CampaignSource, CampaignStatus, Channel};
use engage_store::StateStore;

#[derive(Parser, Debug)]
#[command(name = "engage-desk")]
#[command(about = "Desktop-style dashboard for B2B customer engagement")]
#[command(version)]
struct Cli {
    /// State file path (overrides config)
    #[arg(long, env = "ENGAGE_DESK__DATA_PATH", global = true)]
    data_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the full dashboard (default when no command is given)
    Dashboard,
    /// Add a new automation campaign manually
    AddCampaign {
        #[arg(long)]
        name: String,
        /// Target segment; must exist in the segment registry
        #[arg(long)]
        segment: String,
        /// Trigger condition
        #[arg(long, default_value = "")]
        trigger: String,
        /// Channel or `+`-separated channel list, e.g. "Email+LinkedIn"
        #[arg(long)]
        channel: String,
        /// Template name to use
        #[arg(long)]
        template: String,
        /// Next send date (YYYY-MM-DD). Defaults to today
        #[arg(long)]
        next_send: Option<String>,
        /// Initial status (default: scheduled)
        #[arg(long)]
        status: Option<String>,
    },
    /// Generate a campaign for a segment from a marketing framework
    SelectStrategy {
        /// One of ABM, AIDA, RACE, 7Ps
        strategy: String,
        #[arg(long)]
        segment: String,
    },
    /// Match a free-text idea to an automation rule and launch it
    CreativeMode {
        /// The campaign idea, e.g. "demo video for SMB CTOs"
        idea: Vec<String>,
    },
    /// Show one campaign by id
    ShowCampaign {
        #[arg(long)]
        id: Uuid,
    },
    /// Move a campaign to another lifecycle status
    UpdateStatus {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        status: String,
    },
    /// List campaigns in stored order, optionally filtered
    ListCampaigns {
        #[arg(long)]
        segment: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Restore the bundled sample data, overwriting current state
    ResetSample,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config, using defaults: {e}");
        AppConfig::default()
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let data_path = cli.data_path.unwrap_or_else(|| config.data_path.clone());
    let store = StateStore::new(data_path);

    match cli.command.unwrap_or(Command::Dashboard) {
        Command::Dashboard => {
            let doc = store.load()?;
            print!("{}", engage_dashboard::render_dashboard(&doc, Local::now()));
        }
        Command::AddCampaign {
            name,
            segment,
            trigger,
            channel,
            template,
            next_send,
            status,
        } => {
            let channels = Channel::parse_list(&channel)?;
            let next_send = match next_send {
                Some(raw) => parse_next_send(&raw)?,
                None => Local::now().date_naive(),
            };
            let status = status
                .map(|s| s.parse::<CampaignStatus>())
                .transpose()?;

            let mut doc = store.load()?;
            let mut repo = CampaignRepository::new(&mut doc, &store);
            let draft = CampaignDraft {
                name,
                segment,
                trigger,
                channels,
                template,
                next_send,
                status,
                cadence_offsets: Vec::new(),
                ab_variants: Vec::new(),
                source: CampaignSource::Manual,
            };
            let campaign = repo.add(draft)?;
            print!("{}", engage_dashboard::render_campaign(&campaign));
        }
        Command::SelectStrategy { strategy, segment } => {
            let strategy: Strategy = strategy.parse()?;
            let mut doc = store.load()?;
            let mut repo = CampaignRepository::new(&mut doc, &store);
            let draft = StrategyEngine::apply(
                strategy,
                &repo.segments(),
                &segment,
                Local::now().date_naive(),
            )?;
            let campaign = repo.add(draft)?;
            info!(%strategy, segment, "Strategy campaign created");
            print!("{}", engage_dashboard::render_campaign(&campaign));
        }
        Command::CreativeMode { idea } => {
            let idea = idea.join(" ");
            if idea.trim().is_empty() {
                bail!("Creative mode needs an idea, e.g. `engage-desk creative-mode demo video for SMB CTOs`");
            }
            let matcher = CreativeModeMatcher::new();
            let plan = match matcher.plan(&idea, Local::now().date_naive()) {
                Ok(plan) => plan,
                Err(EngageError::NoMatch(idea)) => {
                    warn!(%idea, "No automation rule matched");
                    bail!(
                        "No automation rule matched idea {idea:?}. \
                         Fall back to a manual `engage-desk add-campaign`."
                    );
                }
                Err(e) => return Err(e.into()),
            };

            let mut doc = store.load()?;
            let mut repo = CampaignRepository::new(&mut doc, &store);
            print!("{}", engage_dashboard::render_creative_studio(&idea, &plan));
            let campaign = repo.add(plan.draft.clone())?;
            println!();
            print!("{}", engage_dashboard::render_campaign(&campaign));
        }
        Command::ShowCampaign { id } => {
            let mut doc = store.load()?;
            let repo = CampaignRepository::new(&mut doc, &store);
            let campaign = repo.get(id)?;
            print!("{}", engage_dashboard::render_campaign(campaign));
        }
        Command::UpdateStatus { id, status } => {
            let status: CampaignStatus = status.parse()?;
            let mut doc = store.load()?;
            let mut repo = CampaignRepository::new(&mut doc, &store);
            let campaign = repo.update_status(id, status)?;
            print!("{}", engage_dashboard::render_campaign(&campaign));
        }
        Command::ListCampaigns { segment, status } => {
            let status = status
                .map(|s| s.parse::<CampaignStatus>())
                .transpose()?;
            let mut doc = store.load()?;
            let repo = CampaignRepository::new(&mut doc, &store);
            let campaigns = repo.list(segment.as_deref(), status);
            print!("{}", engage_dashboard::render_campaign_list(&campaigns));
        }
        Command::ResetSample => {
            let doc = store.reset_to_sample()?;
            println!(
                "Restored sample data: {} segments, {} campaigns.",
                doc.segments.len(),
                doc.campaigns.len()
            );
        }
    }

    Ok(())
}
