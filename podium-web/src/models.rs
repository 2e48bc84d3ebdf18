use serde::Deserialize;

use podium::config::{ProfileConfig, SocialLinkConfig};

/// Query string for the competition toggle.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpandQuery {
    pub expanded: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct ProfileView {
    pub name: String,
    pub description: String,
    pub location: Option<String>,
    pub social_links: Vec<SocialLinkView>,
}

impl From<&ProfileConfig> for ProfileView {
    fn from(profile: &ProfileConfig) -> Self {
        Self {
            name: profile.name.clone(),
            description: profile.description.clone(),
            location: profile.location.clone(),
            social_links: profile.social_links.iter().map(SocialLinkView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLinkView {
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub url: String,
    pub username: String,
}

impl From<&SocialLinkConfig> for SocialLinkView {
    fn from(link: &SocialLinkConfig) -> Self {
        let (label, icon, color) = platform_style(&link.platform);
        Self {
            label,
            icon,
            color,
            url: link.url.clone(),
            username: link.username.clone(),
        }
    }
}

/// Label, icon token and color token for a social platform name.
pub fn platform_style(platform: &str) -> (&'static str, &'static str, &'static str) {
    match platform.trim().to_lowercase().as_str() {
        "instagram" => ("Instagram", "instagram", "text-pink-500"),
        "twitter" | "x" => ("X", "twitter", "text-blue-400"),
        "facebook" => ("Facebook", "facebook", "text-blue-600"),
        "youtube" => ("YouTube", "youtube", "text-red-500"),
        "linkedin" => ("LinkedIn", "linkedin", "text-blue-600"),
        "github" => ("GitHub", "github", "text-slate-700"),
        "strava" => ("Strava", "strava", "text-orange-500"),
        "email" => ("Email", "at-sign", "text-emerald-600"),
        _ => ("Link", "link", "text-blue-500"),
    }
}
