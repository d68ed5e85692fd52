//! Tag filters for the projects grid and skills list

use crate::constants::skills::EXPERT_LEVEL;
use crate::content::{Project, ProjectTag, Skill, SkillTag};

/// Selected project tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Tag(ProjectTag),
}

impl ProjectFilter {
    /// Tabs in display order
    pub fn tabs() -> impl Iterator<Item = ProjectFilter> {
        std::iter::once(ProjectFilter::All).chain(ProjectTag::ALL.into_iter().map(ProjectFilter::Tag))
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Tag(tag) => tag.label(),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Tag(tag) => project.tags.contains(tag),
        }
    }

    /// Next tab, wrapping
    pub fn next(&self) -> Self {
        cycle(&Self::tabs().collect::<Vec<_>>(), self, 1)
    }

    /// Previous tab, wrapping
    pub fn prev(&self) -> Self {
        let tabs: Vec<_> = Self::tabs().collect();
        cycle(&tabs, self, tabs.len() - 1)
    }
}

/// Selected skill tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillFilter {
    #[default]
    All,
    Tag(SkillTag),
}

impl SkillFilter {
    pub fn tabs() -> impl Iterator<Item = SkillFilter> {
        std::iter::once(SkillFilter::All).chain(SkillTag::ALL.into_iter().map(SkillFilter::Tag))
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkillFilter::All => "All",
            SkillFilter::Tag(tag) => tag.label(),
        }
    }

    pub fn matches(&self, skill: &Skill) -> bool {
        match self {
            SkillFilter::All => true,
            SkillFilter::Tag(tag) => skill.tag == *tag,
        }
    }

    pub fn next(&self) -> Self {
        cycle(&Self::tabs().collect::<Vec<_>>(), self, 1)
    }

    pub fn prev(&self) -> Self {
        let tabs: Vec<_> = Self::tabs().collect();
        cycle(&tabs, self, tabs.len() - 1)
    }
}

fn cycle<T: Copy + PartialEq>(tabs: &[T], current: &T, step: usize) -> T {
    let idx = tabs.iter().position(|t| t == current).unwrap_or(0);
    tabs[(idx + step) % tabs.len()]
}

/// Projects for the grid: everything except the featured project, filtered
pub fn filter_projects<'a>(
    projects: &'a [Project],
    featured: Option<&Project>,
    filter: ProjectFilter,
) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| featured.map_or(true, |f| p.title != f.title))
        .filter(|p| filter.matches(p))
        .collect()
}

pub fn filter_skills(skills: &[Skill], filter: SkillFilter) -> Vec<&Skill> {
    skills.iter().filter(|s| filter.matches(s)).collect()
}

/// Summary numbers shown above the skills list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SkillStats {
    pub total: usize,
    /// Mean level, rounded
    pub average: u8,
    /// Skills at or above the expert level
    pub experts: usize,
}

pub fn skill_stats(skills: &[Skill]) -> SkillStats {
    if skills.is_empty() {
        return SkillStats::default();
    }
    let sum: u32 = skills.iter().map(|s| s.level as u32).sum();
    let total = skills.len();
    SkillStats {
        total,
        average: (sum as f64 / total as f64).round() as u8,
        experts: skills.iter().filter(|s| s.level >= EXPERT_LEVEL).count(),
    }
}
