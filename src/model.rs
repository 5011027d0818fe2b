//! Core data types: the togglable column descriptor, the runtime kind
//! tags for host fields, and the declared-field-list entries the resolver
//! consumes.

use serde::{Deserialize, Serialize};

use crate::slug::labelize;

/// One togglable column descriptor.
///
/// Pure data: an attribute name, a display label, and the default
/// checked state used before any selection exists. Constructed once per
/// resource-definition evaluation and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Human-readable label. Never empty: falls back to the attribute.
    pub label: String,
    /// Default visibility when no selection exists yet.
    pub checked: bool,
    /// Stable identifier, unique within a resource's field set.
    pub attribute: String,
}

impl Field {
    /// Create a field. A missing or empty `label` defaults to the
    /// attribute name verbatim.
    pub fn new(attribute: impl Into<String>, checked: bool, label: Option<String>) -> Self {
        let attribute = attribute.into();
        let label = label
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| attribute.clone());
        Self {
            label,
            checked,
            attribute,
        }
    }

    /// Create a field with a humanized label derived from the attribute
    /// (e.g. `"created_at"` becomes `"Created At"`).
    pub fn auto_labeled(attribute: impl Into<String>, checked: bool) -> Self {
        let attribute = attribute.into();
        let label = labelize(&attribute);
        Self::new(attribute, checked, Some(label))
    }
}

/// Runtime kind tag for a host-declared field.
///
/// A closed set assigned by the host adapter when it maps its own field
/// objects into [`FieldEntry`] lists. Collection-valued relationship
/// kinds cannot be toggled as columns and are always excluded once
/// filtering applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Plain scalar column backed by a model attribute.
    Scalar,
    /// Derived/computed value with no direct column.
    Computed,
    /// Single related record displayed inline.
    BelongsTo,
    /// Single dependent record displayed inline.
    HasOne,
    /// Collection of dependent records.
    HasMany,
    /// Collection of records through a pivot.
    BelongsToMany,
}

impl FieldKind {
    /// Whether a field of this kind can be shown or hidden as a column.
    ///
    /// `HasMany` and `BelongsToMany` render related-record collections,
    /// not scalar columns, so they are never togglable.
    pub fn is_togglable(self) -> bool {
        !matches!(self, Self::HasMany | Self::BelongsToMany)
    }
}

/// How the host's opaque field objects surface to the resolver.
///
/// The resolver only needs an attribute name and a kind tag; everything
/// else about the host field stays opaque and flows through untouched.
pub trait ResourceField {
    fn attribute(&self) -> &str;
    fn kind(&self) -> FieldKind;
}

/// One entry of a resource's declared field list.
///
/// Hosts may wrap fields in merged bundles or interleave non-field
/// items (panels, headings); the resolver flattens groups and drops
/// everything that is not a displayable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEntry<F> {
    /// A displayable field.
    Field(F),
    /// A merged/grouped bundle, flattened depth-first.
    Group(Vec<FieldEntry<F>>),
    /// Anything not recognized as a displayable field.
    Other,
}

impl<F> FieldEntry<F> {
    /// Flatten a declared field list into a flat field sequence,
    /// expanding groups depth-first and dropping non-field entries.
    /// Declared order is preserved.
    pub fn flatten(entries: Vec<FieldEntry<F>>) -> Vec<F> {
        let mut fields = Vec::new();
        for entry in entries {
            match entry {
                FieldEntry::Field(field) => fields.push(field),
                FieldEntry::Group(inner) => fields.extend(FieldEntry::flatten(inner)),
                FieldEntry::Other => {}
            }
        }
        fields
    }
}
