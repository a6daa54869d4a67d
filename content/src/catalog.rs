//! Static project catalog.
//!
//! The shape of the catalog (ids, order, categories, tech stacks, asset
//! paths) is fixed here; every human-readable string is resolved through the
//! [`Localizer`] once, when the catalog is built.

use std::collections::{HashMap, HashSet};

use folio_types::{
    ArchitectureLayer, CategoryFilter, CostOptimization, ImpactMetric, MediaItem, PressMention,
    Project, ProjectCategory, ProjectDetail, ProjectId,
};

use crate::{ContentError, Localizer};

#[derive(Debug, Clone, Copy)]
struct PressSpec {
    outlet: &'static str,
    url: &'static str,
}

#[derive(Debug, Clone, Copy)]
struct LayerSpec {
    key: &'static str,
    items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
struct DetailSpec {
    hero_image: &'static str,
    metric_values: &'static [&'static str],
    architecture: &'static [LayerSpec],
    cost_optimization: bool,
    press: &'static [PressSpec],
    gallery: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
struct ProjectSpec {
    id: &'static str,
    category: ProjectCategory,
    technologies: &'static [&'static str],
    /// `None` while the detail page has not been written yet.
    detail: Option<DetailSpec>,
}

/// Array order is carousel order.
const PROJECT_SPECS: &[ProjectSpec] = &[
    ProjectSpec {
        id: "rfid-inventory",
        category: ProjectCategory::Rfid,
        technologies: &["Rust", "MQTT", "PostgreSQL", "React"],
        detail: Some(DetailSpec {
            hero_image: "/images/projects/rfid-inventory/hero.webp",
            metric_values: &["99.2%", "-65%", "1,200+"],
            architecture: &[
                LayerSpec {
                    key: "edge",
                    items: &["Impinj readers", "Rust gateway", "MQTT"],
                },
                LayerSpec {
                    key: "cloud",
                    items: &["AWS IoT Core", "Lambda", "PostgreSQL"],
                },
                LayerSpec {
                    key: "client",
                    items: &["React", "TypeScript"],
                },
            ],
            cost_optimization: true,
            press: &[PressSpec {
                outlet: "RFID Journal",
                url: "https://www.rfidjournal.com/",
            }],
            gallery: &[
                "/images/projects/rfid-inventory/dashboard.webp",
                "/images/projects/rfid-inventory/handheld.webp",
            ],
        }),
    },
    ProjectSpec {
        id: "smart-fitting-room",
        category: ProjectCategory::Rfid,
        technologies: &["TypeScript", "Node.js", "WebSockets", "RFID"],
        detail: Some(DetailSpec {
            hero_image: "/images/projects/smart-fitting-room/hero.webp",
            metric_values: &["+18%", "40"],
            architecture: &[
                LayerSpec {
                    key: "edge",
                    items: &["RFID antennas", "Node.js agent"],
                },
                LayerSpec {
                    key: "client",
                    items: &["Touch kiosk", "WebSockets"],
                },
            ],
            cost_optimization: false,
            press: &[],
            gallery: &["/images/projects/smart-fitting-room/mirror.webp"],
        }),
    },
    ProjectSpec {
        id: "click-and-collect",
        category: ProjectCategory::Omni,
        technologies: &["Java", "Spring Boot", "Kafka", "Kubernetes"],
        detail: Some(DetailSpec {
            hero_image: "/images/projects/click-and-collect/hero.webp",
            metric_values: &["2h", "300+", "35%"],
            architecture: &[
                LayerSpec {
                    key: "cloud",
                    items: &["Spring Boot", "Kafka", "Kubernetes"],
                },
                LayerSpec {
                    key: "client",
                    items: &["Store associate app", "Customer notifications"],
                },
            ],
            cost_optimization: true,
            press: &[],
            gallery: &[],
        }),
    },
    ProjectSpec {
        id: "endless-aisle",
        category: ProjectCategory::Omni,
        technologies: &["React", "GraphQL", "Go", "Redis"],
        detail: Some(DetailSpec {
            hero_image: "/images/projects/endless-aisle/hero.webp",
            metric_values: &["+12%", "50k"],
            architecture: &[
                LayerSpec {
                    key: "cloud",
                    items: &["Go services", "GraphQL", "Redis"],
                },
                LayerSpec {
                    key: "client",
                    items: &["React", "In-store tablets"],
                },
            ],
            cost_optimization: false,
            press: &[PressSpec {
                outlet: "Retail Dive",
                url: "https://www.retaildive.com/",
            }],
            gallery: &["/images/projects/endless-aisle/tablet.webp"],
        }),
    },
    ProjectSpec {
        id: "store-pulse",
        category: ProjectCategory::Retail,
        technologies: &["Python", "dbt", "BigQuery", "Looker"],
        detail: None,
    },
];

/// Immutable, ordered project catalog plus its detail lookup table.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<Project>,
    details: HashMap<ProjectId, ProjectDetail>,
    empty_detail: ProjectDetail,
}

impl Catalog {
    /// Build a catalog from explicit records.
    ///
    /// Order of `projects` is carousel order. Ids must be unique.
    pub fn new(
        projects: Vec<Project>,
        details: HashMap<ProjectId, ProjectDetail>,
    ) -> Result<Self, ContentError> {
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(&project.id) {
                return Err(ContentError::DuplicateProject(project.id.clone()));
            }
        }
        Ok(Self {
            projects,
            details,
            empty_detail: ProjectDetail::default(),
        })
    }

    /// The site's own catalog, localized through `localizer`.
    pub fn localized(localizer: &dyn Localizer) -> Result<Self, ContentError> {
        let mut projects = Vec::with_capacity(PROJECT_SPECS.len());
        let mut details = HashMap::new();

        for spec in PROJECT_SPECS {
            let id = ProjectId::new(spec.id);
            let key = |field: &str| format!("projects.{}.{field}", spec.id);

            projects.push(Project {
                id: id.clone(),
                title: localizer.text(&key("title")).into_owned(),
                subtitle: localizer.text(&key("subtitle")).into_owned(),
                description: localizer.text(&key("description")).into_owned(),
                technologies: spec.technologies.iter().map(ToString::to_string).collect(),
                category: spec.category,
            });

            if let Some(detail) = &spec.detail {
                details.insert(id, localize_detail(localizer, spec.id, detail));
            }
        }

        Self::new(projects, details)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.projects.iter().position(|project| project.id == id)
    }

    /// Ordered sub-sequence matching `filter`; `All` yields the whole catalog.
    #[must_use]
    pub fn filtered(&self, filter: CategoryFilter) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|project| filter.matches(project.category))
            .collect()
    }

    /// Detail record for `id`, or the empty record when none was authored.
    #[must_use]
    pub fn detail_for(&self, id: &str) -> &ProjectDetail {
        self.details.get(id).unwrap_or(&self.empty_detail)
    }
}

fn localize_detail(localizer: &dyn Localizer, id: &str, spec: &DetailSpec) -> ProjectDetail {
    let key = |field: &str| format!("projects.{id}.detail.{field}");

    let impact = spec
        .metric_values
        .iter()
        .zip(localizer.list(&key("impact")))
        .map(|(value, label)| ImpactMetric {
            value: (*value).to_string(),
            label,
        })
        .collect();

    let architecture = spec
        .architecture
        .iter()
        .map(|layer| ArchitectureLayer {
            name: localizer
                .text(&format!("architecture.layers.{}", layer.key))
                .into_owned(),
            items: layer.items.iter().map(ToString::to_string).collect(),
        })
        .collect();

    let cost_optimization = spec.cost_optimization.then(|| CostOptimization {
        summary: localizer.text(&key("cost.summary")).into_owned(),
        savings: localizer.list(&key("cost.savings")),
    });

    let press = (!spec.press.is_empty()).then(|| {
        spec.press
            .iter()
            .zip(localizer.list(&key("press")))
            .map(|(press, headline)| PressMention {
                outlet: press.outlet.to_string(),
                headline,
                url: press.url.to_string(),
            })
            .collect()
    });

    let gallery = spec
        .gallery
        .iter()
        .zip(localizer.list(&key("gallery")))
        .map(|(src, caption)| MediaItem {
            src: (*src).to_string(),
            caption,
        })
        .collect();

    ProjectDetail {
        hero_image: spec.hero_image.to_string(),
        challenge: localizer.text(&key("challenge")).into_owned(),
        contributions: localizer.list(&key("contributions")),
        impact,
        architecture,
        cost_optimization,
        press,
        features: localizer.list(&key("features")),
        gallery,
    }
}
