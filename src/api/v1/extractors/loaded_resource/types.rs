use std::sync::Arc;

use crate::services::resources::Resource;

/// The resource resolved from the `resource` request parameter.
///
/// Inserted into request extensions by the resource loader, at most once per
/// request, before the access check runs. A denied request never reaches the
/// handler, so handlers only ever see a resource the caller may access.
#[derive(Debug, Clone)]
pub struct LoadedResource(pub Arc<Resource>);

impl LoadedResource {
    pub fn new(resource: Resource) -> Self {
        Self(Arc::new(resource))
    }
}

impl std::ops::Deref for LoadedResource {
    type Target = Resource;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
