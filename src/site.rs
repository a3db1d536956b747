use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::config::SiteConfig;
use crate::content::load_candidates;
use crate::error::{Result, TrackerError};
use crate::model::Candidate;
use crate::render;

const PAGE_FILE: &str = "index.html";
const ROSTER_FILE: &str = "candidates.json";

/// What a build wrote.
#[derive(Debug, Clone, Serialize)]
pub struct SiteReport {
    pub candidates: usize,
    pub page: PathBuf,
    pub roster: PathBuf,
}

/// Load the roster once and write the site into the output directory.
#[instrument(skip(config), fields(content = %config.content_dir.display()))]
pub fn build(config: &SiteConfig, now: DateTime<Utc>) -> Result<SiteReport> {
    let candidates = load_candidates(&config.content_dir)?;
    write_site(config, &candidates, now)
}

/// Render `candidates` and write the page and roster JSON.
pub fn write_site(
    config: &SiteConfig,
    candidates: &[Candidate],
    now: DateTime<Utc>,
) -> Result<SiteReport> {
    let out = &config.output_dir;
    fs::create_dir_all(out).map_err(|source| TrackerError::Write {
        path: out.clone(),
        source,
    })?;

    let html = render::page(candidates, &config.deadlines, now, config.locale);
    let page = out.join(PAGE_FILE);
    write_file(&page, html.as_bytes())?;

    let json = serde_json::to_vec_pretty(candidates)?;
    let roster = out.join(ROSTER_FILE);
    write_file(&roster, &json)?;

    info!(
        count = candidates.len(),
        output = %out.display(),
        "wrote site"
    );
    Ok(SiteReport {
        candidates: candidates.len(),
        page,
        roster,
    })
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    debug!(path = %path.display(), bytes = contents.len(), "writing");
    fs::write(path, contents).map_err(|source| TrackerError::Write {
        path: path.to_path_buf(),
        source,
    })
}
