//! Access decisions for views
//!
//! The shell only consumes the boolean answer; where it comes from is up to
//! the implementation. `AnnotationAccessChecker` derives it from the access
//! requirement each view declares in the `ViewCatalog`.

use std::sync::Arc;

use crate::domain::models::{Principal, ViewCatalog, ViewId};
use crate::shared::errors::AccessError;

/// Decides whether a principal (or anonymous visitor) may navigate to a view
pub trait AccessChecker: Send + Sync {
    /// Must not block: it runs on the navigation path
    fn has_access(&self, view: ViewId, principal: Option<&Principal>) -> Result<bool, AccessError>;
}

/// Checker backed by the views' declared access requirements
#[derive(Debug, Clone)]
pub struct AnnotationAccessChecker {
    catalog: Arc<ViewCatalog>,
}

impl AnnotationAccessChecker {
    pub fn new(catalog: Arc<ViewCatalog>) -> Self {
        Self { catalog }
    }
}

impl AccessChecker for AnnotationAccessChecker {
    fn has_access(&self, view: ViewId, principal: Option<&Principal>) -> Result<bool, AccessError> {
        // Undeclared views are closed to everyone
        Ok(self
            .catalog
            .get(view)
            .is_some_and(|descriptor| descriptor.access.is_satisfied_by(principal)))
    }
}
