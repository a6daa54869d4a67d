//! Project browser state machine.
//!
//! Tracks the carousel position, the project shown in the detail view, the
//! grid filter, and whether the visitor has opened a project themselves.
//!
//! The explored flag gates auto-loading: before the first explicit
//! selection, arrow navigation only moves the carousel; afterwards every
//! step also opens the new project's detail view. The silent selection made
//! by [`ProjectBrowser::mount`] does not count as exploring.

use folio_content::Catalog;
use folio_types::{CategoryFilter, Project, ProjectDetail, ProjectId, UnknownProjectError};

#[derive(Debug, Clone)]
pub struct ProjectBrowser {
    catalog: Catalog,
    /// Always indexes the unfiltered catalog.
    current_index: usize,
    /// `None` is the carousel view, `Some` the detail view.
    selected: Option<ProjectId>,
    filter: CategoryFilter,
    /// Monotonic: false until the first explicit selection, then true forever.
    has_explored_once: bool,
}

impl ProjectBrowser {
    /// Unmounted browser: carousel at index 0, nothing selected.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            current_index: 0,
            selected: None,
            filter: CategoryFilter::All,
            has_explored_once: false,
        }
    }

    /// Preview the first project if nothing is selected yet.
    ///
    /// Leaves `has_explored_once` untouched.
    pub fn mount(&mut self) {
        if self.selected.is_none() && !self.catalog.is_empty() {
            self.select_index(0);
        }
    }

    /// Open `id` in the detail view and mark the browser as explored.
    pub fn select_project(&mut self, id: &str) -> Result<(), UnknownProjectError> {
        let Some(index) = self.catalog.index_of(id) else {
            tracing::warn!(id, "Rejected selection of unknown project");
            return Err(UnknownProjectError { id: id.to_string() });
        };
        self.select_index(index);
        self.has_explored_once = true;
        Ok(())
    }

    /// Back to the carousel view. Position and explored flag are kept.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn next(&mut self) {
        let len = self.catalog.len();
        if len == 0 {
            return;
        }
        self.step_to((self.current_index + 1) % len);
    }

    pub fn previous(&mut self) {
        let len = self.catalog.len();
        if len == 0 {
            return;
        }
        self.step_to((self.current_index + len - 1) % len);
    }

    /// Change which cards the grid shows. Carousel and selection are untouched.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    #[must_use]
    pub fn projects_filtered_by(&self, filter: CategoryFilter) -> Vec<&Project> {
        self.catalog.filtered(filter)
    }

    /// Projects matching the active filter, in catalog order.
    #[must_use]
    pub fn visible_projects(&self) -> Vec<&Project> {
        self.catalog.filtered(self.filter)
    }

    /// Detail record for `id`; the empty record when none exists.
    #[must_use]
    pub fn detail_for(&self, id: &str) -> &ProjectDetail {
        self.catalog.detail_for(id)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_project(&self) -> Option<&Project> {
        self.catalog.get(self.current_index)
    }

    #[must_use]
    pub fn selected_project_id(&self) -> Option<&ProjectId> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn selected_project(&self) -> Option<&Project> {
        self.selected
            .as_ref()
            .and_then(|id| self.catalog.find(id.as_str()))
    }

    #[must_use]
    pub fn selected_detail(&self) -> Option<&ProjectDetail> {
        self.selected
            .as_ref()
            .map(|id| self.catalog.detail_for(id.as_str()))
    }

    #[must_use]
    pub fn active_filter(&self) -> CategoryFilter {
        self.filter
    }

    #[must_use]
    pub fn has_explored_once(&self) -> bool {
        self.has_explored_once
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Swap in the same catalog rendered for another language.
    ///
    /// Ids and order are language independent, so position, selection,
    /// filter and the explored flag carry over unchanged. A selection the new
    /// catalog lacks is dropped.
    pub fn relocalize(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        if let Some(id) = &self.selected
            && self.catalog.index_of(id.as_str()).is_none()
        {
            tracing::warn!(%id, "Selected project missing after relocalize");
            self.selected = None;
        }
        if self.current_index >= self.catalog.len() {
            self.current_index = 0;
        }
    }

    fn step_to(&mut self, index: usize) {
        self.current_index = index;
        if self.has_explored_once {
            self.select_index(index);
        }
    }

    fn select_index(&mut self, index: usize) {
        if let Some(project) = self.catalog.get(index) {
            self.current_index = index;
            self.selected = Some(project.id.clone());
        }
    }
}
