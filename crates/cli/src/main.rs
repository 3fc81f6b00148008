use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use directory::ProfileDirectory;
use listing::{CriteriaUpdate, SortKey, SortOrder};
use server::{CatalogueSession, CatalogueView};
use sources::{DocumentSource, EmbeddedSource, FileStore, ProfileSource};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

/// Legal Port - Lawyer Consultation Catalogue
#[derive(Parser)]
#[command(name = "legal-port")]
#[command(about = "Browse and filter the lawyer consultation catalogue", long_about = None)]
struct Cli {
    /// Path to a JSON collection dump (defaults to the embedded catalogue)
    #[arg(short, long)]
    profiles: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalogue with filters and sorting
    List {
        /// Free-text search over names and specializations
        #[arg(long)]
        search: Option<String>,

        /// Audio rate ceiling, per minute
        #[arg(long)]
        max_audio_rate: Option<u32>,

        /// Video rate ceiling, per minute
        #[arg(long)]
        max_video_rate: Option<u32>,

        /// Chat rate ceiling, per minute
        #[arg(long)]
        max_chat_rate: Option<u32>,

        /// Minimum star rating
        #[arg(long)]
        min_rating: Option<f32>,

        /// Minimum years of experience
        #[arg(long)]
        min_experience: Option<u32>,

        /// Only lawyers currently online
        #[arg(long)]
        online_only: bool,

        /// Required specialization tag, partial match (repeatable)
        #[arg(long = "specialization")]
        specializations: Vec<String>,

        /// Sort field
        #[arg(long, value_enum, default_value_t = SortKeyArg::Rating)]
        sort_by: SortKeyArg,

        /// Sort direction
        #[arg(long, value_enum, default_value_t = SortOrderArg::Desc)]
        sort_order: SortOrderArg,
    },

    /// Show one profile in full
    Show {
        /// Profile id to display
        #[arg(long)]
        id: String,
    },

    /// List every specialization tag in the catalogue
    Specializations,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortKeyArg {
    Rating,
    Experience,
    AudioRate,
    VideoRate,
    ChatRate,
    Name,
}

impl From<SortKeyArg> for SortKey {
    fn from(arg: SortKeyArg) -> Self {
        match arg {
            SortKeyArg::Rating => SortKey::Rating,
            SortKeyArg::Experience => SortKey::Experience,
            SortKeyArg::AudioRate => SortKey::AudioRate,
            SortKeyArg::VideoRate => SortKey::VideoRate,
            SortKeyArg::ChatRate => SortKey::ChatRate,
            SortKeyArg::Name => SortKey::Name,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SortOrderArg {
    Asc,
    Desc,
}

impl From<SortOrderArg> for SortOrder {
    fn from(arg: SortOrderArg) -> Self {
        match arg {
            SortOrderArg::Asc => SortOrder::Ascending,
            SortOrderArg::Desc => SortOrder::Descending,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // The source is built once, at the composition root: a document store
    // over a collection dump, or the embedded catalogue.
    let source: Box<dyn ProfileSource> = match &cli.profiles {
        Some(path) => Box::new(DocumentSource::new(Arc::new(FileStore::new(path)))),
        None => Box::new(EmbeddedSource::with_seed()),
    };

    match cli.command {
        Commands::List {
            search,
            max_audio_rate,
            max_video_rate,
            max_chat_rate,
            min_rating,
            min_experience,
            online_only,
            specializations,
            sort_by,
            sort_order,
        } => {
            let mut session = CatalogueSession::mount(source.as_ref()).await;

            if let Some(value) = max_audio_rate {
                session.set_filter(CriteriaUpdate::MaxAudioRate(value));
            }
            if let Some(value) = max_video_rate {
                session.set_filter(CriteriaUpdate::MaxVideoRate(value));
            }
            if let Some(value) = max_chat_rate {
                session.set_filter(CriteriaUpdate::MaxChatRate(value));
            }
            if let Some(value) = min_rating {
                session.set_filter(CriteriaUpdate::MinRating(value));
            }
            if let Some(value) = min_experience {
                session.set_filter(CriteriaUpdate::MinExperience(value));
            }
            if online_only {
                session.set_filter(CriteriaUpdate::OnlineOnly(true));
            }
            if !specializations.is_empty() {
                session.set_filter(CriteriaUpdate::RequiredSpecializations(
                    specializations.into_iter().collect::<BTreeSet<_>>(),
                ));
            }
            session.set_filter(CriteriaUpdate::SortBy(sort_by.into()));
            session.set_filter(CriteriaUpdate::SortOrder(sort_order.into()));
            if let Some(term) = search {
                session.set_search_term(term);
            }

            handle_list(&session)?;
        }
        Commands::Show { id } => {
            let directory = load_directory(source.as_ref()).await?;
            handle_show(&directory, &id)?;
        }
        Commands::Specializations => {
            let directory = load_directory(source.as_ref()).await?;
            handle_specializations(&directory);
        }
    }

    Ok(())
}

async fn load_directory(source: &dyn ProfileSource) -> Result<ProfileDirectory> {
    let profiles = source
        .fetch_profiles()
        .await
        .map_err(|error| anyhow!("failed to load profiles: {error}"))?;
    Ok(ProfileDirectory::from_profiles(profiles))
}

/// Render the 'list' command's catalogue view
fn handle_list(session: &CatalogueSession) -> Result<()> {
    match session.view() {
        CatalogueView::Loading => {
            println!("Loading profiles...");
            Ok(())
        }
        CatalogueView::LoadFailed { error } => {
            Err(anyhow!("failed to load profiles: {error}. Try again."))
        }
        CatalogueView::Listing { visible, total } => {
            println!(
                "{}",
                format!("Showing {} of {} lawyers", visible.len(), total).bold()
            );

            if visible.is_empty() {
                println!(
                    "{}",
                    "No lawyers found. Try adjusting your search or filters.".dimmed()
                );
                return Ok(());
            }

            for profile in &visible {
                let availability = if profile.is_online {
                    "online".green()
                } else {
                    "offline".dimmed()
                };
                let verified = if profile.verified { " ✓" } else { "" };

                println!(
                    "\n{}{}  {}",
                    profile.name.bold(),
                    verified.green(),
                    availability
                );
                println!(
                    "  {} stars ({} reviews) | {} yrs experience",
                    format!("{:.1}", profile.rating).yellow(),
                    profile.reviews,
                    profile.experience
                );
                println!("  {}", profile.specializations.join(", ").cyan());
                println!(
                    "  audio {}/min | video {}/min | chat {}/min",
                    profile.pricing.audio, profile.pricing.video, profile.pricing.chat
                );
            }
            Ok(())
        }
    }
}

/// Handle the 'show' command
fn handle_show(directory: &ProfileDirectory, id: &str) -> Result<()> {
    let profile = directory
        .get(id)
        .ok_or_else(|| anyhow!("No profile with id {id}"))?;

    println!("{}", profile.name.bold().blue());
    println!("{}Id: {}", "• ".green(), profile.id);
    println!("{}Avatar: {}", "• ".green(), profile.avatar);
    println!(
        "{}Rating: {:.1} stars over {} reviews",
        "• ".green(),
        profile.rating,
        profile.reviews
    );
    println!("{}Experience: {} years", "• ".green(), profile.experience);
    println!(
        "{}Specializations: {}",
        "• ".cyan(),
        profile.specializations.join(", ")
    );
    println!(
        "{}Rates per minute: audio {}, video {}, chat {}",
        "• ".cyan(),
        profile.pricing.audio,
        profile.pricing.video,
        profile.pricing.chat
    );
    println!(
        "{}Status: {}",
        "• ".cyan(),
        if profile.is_online { "online" } else { "offline" }
    );
    println!("{}Connections: {}", "• ".cyan(), profile.connections);
    println!(
        "{}Verified: {}",
        "• ".cyan(),
        if profile.verified { "yes" } else { "no" }
    );
    Ok(())
}

/// Handle the 'specializations' command
fn handle_specializations(directory: &ProfileDirectory) {
    let tags = directory.specializations();

    println!(
        "{}",
        format!("{} specializations across {} lawyers:", tags.len(), directory.len()).bold()
    );
    for tag in tags {
        let holders = directory
            .all()
            .iter()
            .filter(|profile| profile.specializations.contains(&tag))
            .count();
        println!("  - {tag} ({holders})");
    }
}
