//! Project categories and the filter built on top of them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategoryError(pub String);

/// Closed set of categories a project can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Rfid,
    Omni,
    Retail,
}

impl ProjectCategory {
    #[must_use]
    pub const fn all() -> &'static [ProjectCategory] {
        &[
            ProjectCategory::Rfid,
            ProjectCategory::Omni,
            ProjectCategory::Retail,
        ]
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ProjectCategory::Rfid => "rfid",
            ProjectCategory::Omni => "omni",
            ProjectCategory::Retail => "retail",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectCategory {
    type Err = UnknownCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rfid" => Ok(ProjectCategory::Rfid),
            "omni" | "omnichannel" => Ok(ProjectCategory::Omni),
            "retail" => Ok(ProjectCategory::Retail),
            _ => Err(UnknownCategoryError(s.to_string())),
        }
    }
}

/// Category filter applied to the project grid.
///
/// `All` matches every project. Filtering only decides which cards render;
/// it never moves the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    /// Every filter value in display order (`all` first).
    #[must_use]
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(
                ProjectCategory::all()
                    .iter()
                    .copied()
                    .map(CategoryFilter::Only),
            )
            .collect()
    }

    #[must_use]
    pub fn matches(self, category: ProjectCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl From<ProjectCategory> for CategoryFilter {
    fn from(category: ProjectCategory) -> Self {
        CategoryFilter::Only(category)
    }
}
