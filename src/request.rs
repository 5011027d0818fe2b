//! Request classification.
//!
//! The host maps its route/controller identities onto [`HandlerKind`]
//! once, at request time; everything downstream switches on that tag
//! instead of on concrete host types. [`RequestContext`] carries the
//! classification inputs plus the raw encoded filter parameter.

use std::str::FromStr;

use crate::error::ColumnsError;

/// The kind of handler a route is bound to.
///
/// Closed set assigned by the host adapter at request-classification
/// time. Anything the host cannot map onto a known kind is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    /// Collection listing.
    Index,
    /// Single-record detail view.
    Show,
    /// Collection count query.
    Count,
    /// Bulk action submission.
    ActionSubmit,
    /// Filter-options lookup for the filter menu.
    FilterOptions,
    /// Custom listing view (lens).
    Lens,
    /// Any other handler.
    Other,
}

/// HTTP method bound to the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl FromStr for Method {
    type Err = ColumnsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            other => Err(ColumnsError::Request(format!("unknown HTTP method: {other}"))),
        }
    }
}

/// Per-request context the engine classifies and decodes from.
///
/// Transient: built by the host adapter for one request and discarded
/// afterwards.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Kind of handler the route resolved to.
    pub handler: HandlerKind,
    /// HTTP method of the request.
    pub method: Method,
    /// Whether the request was reached through a parent record's
    /// relationship (nested listing).
    pub via_relationship: bool,
    /// Raw encoded filter parameter, if the request carried one.
    pub filters: Option<String>,
}

impl RequestContext {
    pub fn new(handler: HandlerKind, method: Method) -> Self {
        Self {
            handler,
            method,
            via_relationship: false,
            filters: None,
        }
    }

    /// Mark the request as relationship-scoped.
    pub fn with_via_relationship(mut self, via_relationship: bool) -> Self {
        self.via_relationship = via_relationship;
        self
    }

    /// Attach the raw encoded filter parameter.
    pub fn with_filters(mut self, filters: impl Into<String>) -> Self {
        self.filters = Some(filters.into());
        self
    }

    /// Decide whether column filtering applies to this request.
    ///
    /// First match wins:
    /// 1. action submission via POST applies (actions can target a
    ///    filtered subset of visible records);
    /// 2. relationship-scoped requests and detail views never apply;
    /// 3. otherwise only listing, count, filter-options and lens
    ///    handlers apply.
    pub fn should_apply_columns_filter(&self) -> bool {
        if self.handler == HandlerKind::ActionSubmit && self.method == Method::Post {
            return true;
        }

        if self.via_relationship || self.handler == HandlerKind::Show {
            return false;
        }

        matches!(
            self.handler,
            HandlerKind::FilterOptions
                | HandlerKind::Index
                | HandlerKind::Count
                | HandlerKind::Lens
        )
    }
}
