pub use config::SiteConfig;
pub use content::{load_candidates, parse_candidate, to_source};
pub use countdown::{time_remaining, CountdownTicker};
pub use error::{Result, TrackerError};
pub use model::*;

pub mod config;
pub mod content;
pub mod countdown;
pub mod error;
pub mod model;
pub mod render;
pub mod site;
