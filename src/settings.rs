//! Engine settings.
//!
//! The per-resource knobs the engine needs: the title the host UI shows
//! for the column picker, the resource type name the cache key derives
//! from, and the descriptor key that marks the column filter inside the
//! encoded filter parameter.

use serde::{Deserialize, Serialize};

use crate::slug::{cache_key, resource_slug};

/// Descriptor key marking the column filter, unless overridden.
pub const DEFAULT_FILTER_KEY: &str = "columns-filter";

/// Settings for one resource's column filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSettings {
    /// Title the host UI shows for the column picker.
    pub title: String,
    /// Resource type name the slug and cache key derive from.
    pub resource_name: String,
    /// Descriptor key marking the column filter in the filter payload.
    pub filter_key: String,
}

impl FilterSettings {
    /// Settings with the default title and filter key.
    pub fn new(resource_name: impl Into<String>) -> Self {
        Self {
            title: "Columns".to_string(),
            resource_name: resource_name.into(),
            filter_key: DEFAULT_FILTER_KEY.to_string(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_filter_key(mut self, filter_key: impl Into<String>) -> Self {
        self.filter_key = filter_key.into();
        self
    }

    /// Stable slug for the resource type name.
    pub fn slug(&self) -> String {
        resource_slug(&self.resource_name)
    }

    /// Session-store key for this resource's persisted selection.
    pub fn cache_key(&self) -> String {
        cache_key(&self.slug())
    }
}
