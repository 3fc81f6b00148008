//! Demo harness for the catalogue session.
//!
//! This binary walks the embedded catalogue through a realistic browse:
//! mount, narrow the listing a few ways, then reset.

use anyhow::Result;
use listing::{CriteriaUpdate, SortKey, SortOrder};
use server::{CatalogueSession, CatalogueView};
use sources::{EmbeddedSource, ProfileSource};
use tracing::info;
use tracing_subscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info,server=debug,listing=debug,sources=debug")
        .init();

    info!("Starting Legal Port catalogue demo");

    let source = EmbeddedSource::with_seed();
    info!("Mounting catalogue from {}", source.name());
    let mut session = CatalogueSession::mount(&source).await;

    info!("--- Default listing ---");
    render(&session);

    info!("--- Online criminal lawyers, best rated first ---");
    session.set_filter(CriteriaUpdate::OnlineOnly(true));
    session.set_search_term("criminal");
    render(&session);

    info!("--- Cheapest video consultations ---");
    session.reset_filters();
    session.set_filter(CriteriaUpdate::SortBy(SortKey::VideoRate));
    session.set_filter(CriteriaUpdate::SortOrder(SortOrder::Ascending));
    session.set_filter(CriteriaUpdate::MaxVideoRate(18));
    render(&session);

    info!("--- After reset ---");
    session.reset_filters();
    render(&session);

    Ok(())
}

fn render(session: &CatalogueSession) {
    match session.view() {
        CatalogueView::Loading => info!("Loading profiles..."),
        CatalogueView::LoadFailed { error } => {
            info!("Could not load profiles: {error}. Try reloading.")
        }
        CatalogueView::Listing { visible, total } => {
            info!("Showing {} of {} lawyers", visible.len(), total);
            for (position, profile) in visible.iter().enumerate() {
                info!(
                    "{}. {} - {:.1} stars ({} reviews), {} yrs [{}]",
                    position + 1,
                    profile.name,
                    profile.rating,
                    profile.reviews,
                    profile.experience,
                    if profile.is_online { "online" } else { "offline" }
                );
                info!("   Specializations: {}", profile.specializations.join(", "));
                info!(
                    "   Rates: audio {}/min, video {}/min, chat {}/min",
                    profile.pricing.audio, profile.pricing.video, profile.pricing.chat
                );
            }
        }
    }
}
