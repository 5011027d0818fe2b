//! # columns-filter
//!
//! A host-agnostic library for per-resource column visibility: end
//! users pick which columns of a resource listing they want to see, and
//! the choice is persisted per session so later requests keep honoring
//! it, including count queries and bulk action submissions that carry
//! no explicit selection of their own.
//!
//! ## Resolution Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host adapter (your framework integration)                  │
//! │  - Maps routes onto HandlerKind, builds RequestContext      │
//! │  - Maps its field objects into FieldEntry lists             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Classification (request.rs)                                │
//! │  - should_apply_columns_filter: apply or skip               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Selection (decode.rs + store/)                             │
//! │  - Inline selection from the encoded filter parameter,      │
//! │    else the persisted per-session fallback                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Resolution (resolver.rs)                                   │
//! │  - Flatten groups, drop untogglable kinds, intersect with   │
//! │    the selection; declared order preserved                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Silent Degradation
//!
//! This subsystem only affects display preferences, never data
//! integrity, so it degrades instead of failing: malformed filter
//! payloads decode to "no selection", unknown attributes drop out of
//! the intersection, and a missing persisted selection reads as empty.
//! The only errors that propagate are failures of the session store
//! itself.
//!
//! ## Module Overview
//!
//! - [`resolver`]: the engine; [`resolver::ColumnsFiltered`] wraps a
//!   field provider and a session store
//! - [`request`]: request classification ([`request::RequestContext`])
//! - [`decode`]: encoded filter-parameter decoding
//! - [`model`]: field descriptors and kind tags
//! - [`store`]: the session-store trait plus memory and file backends
//! - [`slug`]: slug, cache-key and label derivation
//! - [`settings`]: per-resource settings
//! - [`error`]: error types

pub mod decode;
pub mod error;
pub mod model;
pub mod request;
pub mod resolver;
pub mod settings;
pub mod slug;
pub mod store;
