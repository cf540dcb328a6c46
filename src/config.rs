use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::Deserialize;
use yew_icons::IconId;

use crate::error::ConfigError;

const BUNDLED_CONFIG: &str = include_str!("../assets/portfolio.json");

static BUNDLED: Lazy<PortfolioConfig> = Lazy::new(|| match PortfolioConfig::from_json(BUNDLED_CONFIG) {
    Ok(config) => config,
    Err(err) => {
        log::error!("bundled portfolio config is invalid: {err}");
        PortfolioConfig::default()
    }
});

/// Icons a portfolio config may name.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NavIcon {
    Home,
    About,
    Projects,
    Contact,
    Github,
    Linkedin,
    Mail,
}

impl NavIcon {
    pub fn icon_id(self) -> IconId {
        match self {
            NavIcon::Home => IconId::LucideHome,
            NavIcon::About => IconId::LucideInfo,
            NavIcon::Projects => IconId::LucideBriefcase,
            NavIcon::Contact => IconId::LucideMessageSquare,
            NavIcon::Github => IconId::LucideGithub,
            NavIcon::Linkedin => IconId::LucideLinkedin,
            NavIcon::Mail => IconId::LucideMail,
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub avatar_url: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct NavLink {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub icon: Option<NavIcon>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub id: String,
    pub icon: NavIcon,
    pub href: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PortfolioConfig {
    pub profile: Profile,
    #[serde(default)]
    pub links: Vec<NavLink>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

impl PortfolioConfig {
    /// Parses and validates a config document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: PortfolioConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// The config shipped in `assets/portfolio.json`.
    pub fn bundled() -> &'static PortfolioConfig {
        &BUNDLED
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for link in &self.links {
            if link.id.trim().is_empty() {
                return Err(ConfigError::EmptyId);
            }
            if !seen.insert(link.id.as_str()) {
                return Err(ConfigError::DuplicateLinkId(link.id.clone()));
            }
        }

        let mut seen = HashSet::new();
        for social in &self.socials {
            if social.id.trim().is_empty() {
                return Err(ConfigError::EmptyId);
            }
            if !seen.insert(social.id.as_str()) {
                return Err(ConfigError::DuplicateSocialId(social.id.clone()));
            }
        }
        Ok(())
    }

    pub fn has_link(&self, id: &str) -> bool {
        self.links.iter().any(|link| link.id == id)
    }

    /// Section shown before the user picks one.
    pub fn initial_section(&self) -> String {
        self.links
            .first()
            .map(|link| link.id.clone())
            .unwrap_or_else(|| "home".to_string())
    }
}
