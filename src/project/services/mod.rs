//! Application services for project and membership management.

mod catalog;

pub use catalog::{
    CreateProjectRequest, ProjectCatalogError, ProjectCatalogResult, ProjectCatalogService,
    ProjectDetail, UpdateProjectRequest,
};
