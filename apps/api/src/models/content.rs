use serde::{Deserialize, Serialize};

/// The whole static portfolio document. Loaded once at startup, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioContent {
    pub personal_info: PersonalInfo,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub experiences: Vec<Company>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub hero_stats: Vec<HeroStat>,
    pub social_links: SocialLinks,
}

impl PersonalInfo {
    /// First word of the owner's name, used to address outbound messages.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroStat {
    pub icon: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub link: Option<String>,
}

/// An employer and the ordered roles held there.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(rename = "company")]
    pub name: String,
    pub location: Option<String>,
    pub logo_url: Option<String>,
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub title: String,
    pub employment_type: String,
    #[serde(flatten)]
    pub date_range: DateRange,
    pub description: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Free-text "Mon YYYY" tokens, or "Present" for an open-ended end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(rename = "startDate")]
    pub start: String,
    #[serde(rename = "endDate")]
    pub end: String,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}
