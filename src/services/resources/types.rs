use chrono::{DateTime, Utc};

use crate::repos::resource_repo::ResourceRow;

/// What a resource is, derived from its qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Project,
    Module,
    Directory,
    File,
    Library,
    View,
    Unknown,
}

impl ResourceKind {
    pub fn from_qualifier(qualifier: &str) -> Self {
        match qualifier {
            "TRK" => Self::Project,
            "BRC" => Self::Module,
            "DIR" | "PAC" => Self::Directory,
            "FIL" | "CLA" | "UTS" => Self::File,
            "LIB" => Self::Library,
            "VW" | "SVW" => Self::View,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Module => "module",
            Self::Directory => "directory",
            Self::File => "file",
            Self::Library => "library",
            Self::View => "view",
            Self::Unknown => "unknown",
        }
    }

    /// Components inherit the permissions of the project that owns them.
    fn inherits_root_permissions(&self) -> bool {
        matches!(self, Self::Module | Self::Directory | Self::File)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub id: i64,
    pub key: String,
    pub name: String,
    pub long_name: Option<String>,
    pub scope: String,
    pub qualifier: String,
    /// Direct parent in the component tree.
    pub root_id: Option<i64>,
    /// Top-level project reached by following `root_id`. Filled in by
    /// `ResourceStore::find_by_key`, `None` until resolved.
    pub root_project_id: Option<i64>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl Resource {
    pub fn kind(&self) -> ResourceKind {
        ResourceKind::from_qualifier(&self.qualifier)
    }

    /// Id of the resource whose role grants decide access to this one.
    pub fn permission_target(&self) -> i64 {
        if self.kind().inherits_root_permissions() {
            self.root_project_id.unwrap_or(self.id)
        } else {
            self.id
        }
    }
}

impl From<ResourceRow> for Resource {
    fn from(row: ResourceRow) -> Self {
        Self {
            id: row.id,
            key: row.kee,
            name: row.name,
            long_name: row.long_name,
            scope: row.scope,
            qualifier: row.qualifier,
            root_id: row.root_id,
            root_project_id: None,
            enabled: row.enabled,
            created_at: row.created_at,
        }
    }
}
