use serde::Serialize;
use strum::{EnumIter, IntoEnumIterator};

/// Display name used when a unit has no usable `name`.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Image shown when a unit has no usable `photo`, or the photo fails to load.
pub const PLACEHOLDER_PHOTO: &str = "/photos/placeholder.svg";

/// Sort key given to units without an `order`, so they sort last.
pub const DEFAULT_ORDER: i64 = 999;

/// A fully defaulted candidate profile, built once per source unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub byline: String,
    pub photo: String,
    pub website: String,
    pub withdrawn: bool,
    pub order: i64,
    pub social: SocialLinks,
    pub bio: String,
    pub announcements: String,
    pub staff_supporters: String,
}

/// Outbound links for each supported platform. Empty means "no link".
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLinks {
    pub x: String,
    pub facebook: String,
    pub instagram: String,
    pub youtube: String,
    pub linkedin: String,
    pub tiktok: String,
    pub email: String,
}

impl SocialLinks {
    /// The link stored for `platform`.
    pub fn get(&self, platform: Platform) -> &str {
        match platform {
            Platform::X => &self.x,
            Platform::Facebook => &self.facebook,
            Platform::Instagram => &self.instagram,
            Platform::Youtube => &self.youtube,
            Platform::Linkedin => &self.linkedin,
            Platform::Tiktok => &self.tiktok,
            Platform::Email => &self.email,
        }
    }

    pub(crate) fn get_mut(&mut self, platform: Platform) -> &mut String {
        match platform {
            Platform::X => &mut self.x,
            Platform::Facebook => &mut self.facebook,
            Platform::Instagram => &mut self.instagram,
            Platform::Youtube => &mut self.youtube,
            Platform::Linkedin => &mut self.linkedin,
            Platform::Tiktok => &mut self.tiktok,
            Platform::Email => &mut self.email,
        }
    }

    /// Platforms with a non-empty link, in display order.
    pub fn active(&self) -> impl Iterator<Item = (Platform, &str)> + '_ {
        Platform::iter()
            .map(|p| (p, self.get(p)))
            .filter(|(_, url)| !url.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }
}

/// A supported social platform.
///
/// The serialized form is the header key used in source units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, strum_macros::Display,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    X,
    Facebook,
    Instagram,
    Youtube,
    Linkedin,
    Tiktok,
    Email,
}

impl Platform {
    /// Human-readable name, used for accessible labels.
    pub fn label(self) -> &'static str {
        match self {
            Platform::X => "X (Twitter)",
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::Youtube => "YouTube",
            Platform::Linkedin => "LinkedIn",
            Platform::Tiktok => "TikTok",
            Platform::Email => "Email",
        }
    }

    /// Whether the stored value is a bare address rather than a URL.
    pub fn is_email(self) -> bool {
        matches!(self, Platform::Email)
    }
}
