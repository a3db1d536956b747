use chrono::Utc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use leadership_tracker::countdown::TICK_PERIOD;
use leadership_tracker::{load_candidates, site, CountdownTicker, SiteConfig};

/// With `TRACKER_WATCH=true` the page is re-rendered every minute until
/// Ctrl-C or the last deadline passes.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = SiteConfig::from_env()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(content = %config.content_dir.display(), "building tracker site");

    let candidates = load_candidates(&config.content_dir)?;
    let report = site::write_site(&config, &candidates, Utc::now())?;
    info!(
        candidates = report.candidates,
        page = %report.page.display(),
        "site written"
    );

    if !config.watch {
        return Ok(());
    }

    let Some(last) = config.deadlines.iter().map(|d| d.target).max() else {
        warn!("no deadlines configured, nothing to watch");
        return Ok(());
    };

    info!("watching, page refreshes every minute");
    let tick_config = config.clone();
    let mut ticker = CountdownTicker::spawn(last, TICK_PERIOD, move |_| {
        if let Err(err) = site::write_site(&tick_config, &candidates, Utc::now()) {
            error!(error = %err, "failed to refresh site");
        }
    });

    tokio::select! {
        _ = tokio::signal::ctrl_c() => info!("stopping"),
        _ = ticker.finished() => info!("final deadline passed"),
    }
    drop(ticker);

    Ok(())
}
