//! Portfolio content model
//!
//! Static data rendered by the TUI. Built-in content ships with the binary;
//! a TOML file with the same shape can replace it.

mod builtin;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{FolioError, Result};

/// Whole page content, in document order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Short brand shown in the header and footer
    pub brand: String,
    pub owner: Owner,
    pub hero: Hero,
    pub about: About,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub full_name: String,
    /// Used for the mail greeting
    pub first_name: String,
    pub email: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub badge: String,
    /// Roles cycled by the typing effect
    pub roles: Vec<String>,
    pub pitch: String,
    pub stack: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub tagline: String,
    pub story: Vec<String>,
    pub personal_stats: Vec<Stat>,
    pub achievements: Vec<Achievement>,
    pub core_stack: Vec<StackItem>,
    pub additional_skills: Vec<String>,
    pub principles: Vec<Achievement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackItem {
    pub name: String,
    /// 0-100
    pub level: u8,
}

/// Skill category, also the skill filter tabs (besides "All")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillTag {
    Frontend,
    Backend,
    DevOps,
    Tools,
}

impl SkillTag {
    pub const ALL: [SkillTag; 4] = [
        SkillTag::Frontend,
        SkillTag::Backend,
        SkillTag::DevOps,
        SkillTag::Tools,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillTag::Frontend => "Frontend",
            SkillTag::Backend => "Backend",
            SkillTag::DevOps => "DevOps",
            SkillTag::Tools => "Tools",
        }
    }
}

impl fmt::Display for SkillTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// 0-100
    pub level: u8,
    pub tag: SkillTag,
    pub description: String,
    pub experience: String,
}

/// Project category, also the project filter tabs (besides "All")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectTag {
    React,
    Django,
    #[serde(rename = "API")]
    Api,
    Dashboard,
    #[serde(rename = "Full-stack")]
    FullStack,
    Mobile,
    #[serde(rename = "AI")]
    Ai,
    #[serde(rename = "E-commerce")]
    ECommerce,
}

impl ProjectTag {
    pub const ALL: [ProjectTag; 8] = [
        ProjectTag::React,
        ProjectTag::Django,
        ProjectTag::Api,
        ProjectTag::Dashboard,
        ProjectTag::FullStack,
        ProjectTag::Mobile,
        ProjectTag::Ai,
        ProjectTag::ECommerce,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectTag::React => "React",
            ProjectTag::Django => "Django",
            ProjectTag::Api => "API",
            ProjectTag::Dashboard => "Dashboard",
            ProjectTag::FullStack => "Full-stack",
            ProjectTag::Mobile => "Mobile",
            ProjectTag::Ai => "AI",
            ProjectTag::ECommerce => "E-commerce",
        }
    }
}

impl fmt::Display for ProjectTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Live,
    #[serde(rename = "In Development")]
    InDevelopment,
    Beta,
    Archived,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Live => "Live",
            ProjectStatus::InDevelopment => "In Development",
            ProjectStatus::Beta => "Beta",
            ProjectStatus::Archived => "Archived",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Metrics {
    pub users: Option<String>,
    pub performance: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub long_description: Option<String>,
    pub tech: Vec<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub repo: Option<String>,
    pub tags: Vec<ProjectTag>,
    #[serde(default)]
    pub featured: bool,
    pub status: ProjectStatus,
    pub year: String,
    #[serde(default)]
    pub metrics: Option<Metrics>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmploymentType {
    Freelance,
    Contract,
    Fulltime,
}

impl EmploymentType {
    pub fn label(&self) -> &'static str {
        match self {
            EmploymentType::Freelance => "Freelance",
            EmploymentType::Contract => "Contract",
            EmploymentType::Fulltime => "Full-time",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub kind: EmploymentType,
    pub impact: String,
    pub bullets: Vec<String>,
    pub achievements: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub blurb: String,
    pub socials: Vec<SocialLink>,
}

impl Portfolio {
    /// Built-in content
    pub fn builtin() -> Self {
        builtin::portfolio()
    }

    /// Load content from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let portfolio = Self::from_toml(&contents).map_err(|source| FolioError::ContentParse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            projects = portfolio.projects.len(),
            skills = portfolio.skills.len(),
            "Loaded portfolio content from {}",
            path.display()
        );
        Ok(portfolio)
    }

    fn from_toml(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load from `path` if given, otherwise use the built-in content
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    /// First featured project, shown above the filtered grid
    pub fn featured_project(&self) -> Option<&Project> {
        self.projects.iter().find(|p| p.featured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_shape() {
        let p = Portfolio::builtin();
        assert_eq!(p.brand, "TechBlaze");
        assert_eq!(p.hero.roles.len(), 5);
        assert_eq!(p.skills.len(), 12);
        assert_eq!(p.projects.len(), 6);
        assert_eq!(p.experience.len(), 3);
        assert_eq!(
            p.featured_project().map(|p| p.title.as_str()),
            Some("TaskMaster Pro")
        );
    }

    #[test]
    fn test_builtin_survives_toml_roundtrip() {
        let p = Portfolio::builtin();
        let text = toml::to_string(&p).unwrap();
        assert_eq!(Portfolio::from_toml(&text).unwrap(), p);
    }

    #[test]
    fn test_load_reports_path_on_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.toml");
        std::fs::write(&path, "brand = 3").unwrap();
        match Portfolio::load(&path) {
            Err(FolioError::ContentParse { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_or_builtin_without_path() {
        assert_eq!(Portfolio::load_or_builtin(None).unwrap(), Portfolio::builtin());
    }
}
