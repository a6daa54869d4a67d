//! Project catalog records.
//!
//! A [`Project`] is what the grid and carousel render. The richer
//! [`ProjectDetail`] is resolved through a side lookup keyed on the project
//! id, so partially authored content can simply be missing from that table.

use serde::{Deserialize, Serialize};

use crate::{ProjectCategory, ProjectId};

/// Raised when a selection names an id the catalog does not contain.
///
/// The catalog is closed and every navigation path derives ids from it, so
/// this only surfaces from hosts passing hand-written ids.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown project: {id}")]
pub struct UnknownProjectError {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub category: ProjectCategory,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactMetric {
    pub value: String,
    pub label: String,
}

/// One layer of an architecture breakdown (e.g. "Edge", "Cloud").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchitectureLayer {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostOptimization {
    pub summary: String,
    pub savings: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressMention {
    pub outlet: String,
    pub headline: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub src: String,
    pub caption: String,
}

/// Detail-view record for a single project.
///
/// `Default` is the documented empty record: blank strings, empty lists and
/// no optional blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDetail {
    pub hero_image: String,
    pub challenge: String,
    pub contributions: Vec<String>,
    pub impact: Vec<ImpactMetric>,
    pub architecture: Vec<ArchitectureLayer>,
    pub cost_optimization: Option<CostOptimization>,
    pub press: Option<Vec<PressMention>>,
    pub features: Vec<String>,
    pub gallery: Vec<MediaItem>,
}

impl ProjectDetail {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::{ImpactMetric, ProjectDetail};

    #[test]
    fn default_detail_is_empty() {
        let detail = ProjectDetail::default();
        assert!(detail.is_empty());
        assert!(detail.hero_image.is_empty());
        assert!(detail.cost_optimization.is_none());
        assert!(detail.press.is_none());
    }

    #[test]
    fn detail_with_any_content_is_not_empty() {
        let detail = ProjectDetail {
            impact: vec![ImpactMetric {
                value: "98%".to_string(),
                label: "accuracy".to_string(),
            }],
            ..ProjectDetail::default()
        };
        assert!(!detail.is_empty());
    }
}
