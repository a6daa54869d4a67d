//! Core engine for Folio: project browser, terminal interpreter and site host.
//!
//! Everything here is a synchronous state machine without IO. Hosts drive
//! time through [`Site::tick`] and render from the read-only accessors.

mod browser;
mod scheduler;
mod site;
pub mod terminal;

pub use browser::ProjectBrowser;
pub use scheduler::{DeferredEffect, Scheduler};
pub use site::{Site, SiteEvent};
pub use terminal::{Scrollback, ScrollbackEntry, Terminal};

pub use folio_content::{Catalog, ContentError, Localizer, Profile, SiteContent};
pub use folio_types::{
    CategoryFilter, CommandOutput, Language, Link, Project, ProjectCategory, ProjectDetail,
    ProjectId, Row, SiteSettings, Theme, UnknownCategoryError, UnknownProjectError,
};
