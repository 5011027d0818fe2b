//! The column-visibility resolution engine.
//!
//! [`ColumnsFiltered`] wraps a host's [`FieldProvider`] and a
//! [`SessionStore`] and resolves, per request, which of the resource's
//! declared fields are actually exposed:
//!
//! 1. the request is classified (apply or skip);
//! 2. if it applies, the active selection is decoded from the inline
//!    filter parameter or read back from the session store;
//! 3. inline selections are persisted for later requests that carry
//!    none (count queries, action submissions);
//! 4. the declared field list is flattened, stripped of kinds that
//!    cannot be toggled, and intersected with the selection.
//!
//! Resolution is read-only ([`ColumnsFiltered::available_fields`] never
//! writes); persistence happens only through
//! [`ColumnsFiltered::sync_selection`], which the host calls once while
//! handling the request.

use crate::decode::FilterDecoder;
use crate::error::Result;
use crate::model::{FieldEntry, ResourceField};
use crate::request::RequestContext;
use crate::settings::FilterSettings;
use crate::store::SessionStore;

/// Provides a resource's statically-declared field list for a request.
///
/// The seam to the host's field system: implementors hand back their
/// declared fields mapped into [`FieldEntry`] values, in declaration
/// order.
pub trait FieldProvider {
    type Field: ResourceField + Clone;

    fn declared_fields(&self, ctx: &RequestContext) -> Vec<FieldEntry<Self::Field>>;
}

/// A field provider augmented with column-visibility resolution.
pub struct ColumnsFiltered<P, S> {
    provider: P,
    store: S,
    settings: FilterSettings,
}

impl<P, S> ColumnsFiltered<P, S>
where
    P: FieldProvider,
    S: SessionStore,
{
    pub fn new(provider: P, store: S, settings: FilterSettings) -> Self {
        Self {
            provider,
            store,
            settings,
        }
    }

    pub fn settings(&self) -> &FilterSettings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The inline selection carried by this request, if any.
    fn inline_selection(&self, ctx: &RequestContext) -> Option<Vec<String>> {
        FilterDecoder::new(ctx.filters.as_deref()).selection(&self.settings.filter_key)
    }

    /// The attributes currently selected for this resource.
    ///
    /// An inline selection always wins; otherwise the persisted
    /// selection is read back, and an empty selection stands in when
    /// neither exists.
    pub fn selected_attributes(&self, ctx: &RequestContext) -> Result<Vec<String>> {
        match self.inline_selection(ctx) {
            Some(attributes) => Ok(attributes),
            None => Ok(self
                .store
                .get(&self.settings.cache_key())?
                .unwrap_or_default()),
        }
    }

    /// Persist the inline selection for reuse on later requests.
    ///
    /// Writes only when filtering applies to this request and the
    /// request carries a non-empty inline selection. Fallback reads
    /// never write the cache back to itself, and skip-classified
    /// requests never touch the store.
    pub fn sync_selection(&self, ctx: &RequestContext) -> Result<()> {
        if !ctx.should_apply_columns_filter() {
            return Ok(());
        }

        if let Some(attributes) = self.inline_selection(ctx) {
            if !attributes.is_empty() {
                self.store.set(&self.settings.cache_key(), &attributes)?;
            }
        }

        Ok(())
    }

    /// Resolve the fields exposed for this request.
    ///
    /// When filtering does not apply, the full declared field list is
    /// returned (flattened, nothing removed). When it applies, fields
    /// whose kind cannot be toggled are dropped and the remainder is
    /// intersected with the active selection, preserving declared
    /// order. An empty selection intentionally yields an empty result:
    /// once filtering applies, no selection means "show nothing", not
    /// "show defaults".
    pub fn available_fields(&self, ctx: &RequestContext) -> Result<Vec<P::Field>> {
        let declared = FieldEntry::flatten(self.provider.declared_fields(ctx));

        if !ctx.should_apply_columns_filter() {
            return Ok(declared);
        }

        let selected = self.selected_attributes(ctx)?;

        Ok(declared
            .into_iter()
            .filter(|field| field.kind().is_togglable())
            .filter(|field| selected.iter().any(|attr| attr == field.attribute()))
            .collect())
    }
}
