//! Site-wide metadata aggregation and search indexing.
//!
//! | Module      | Role                                              |
//! |-------------|---------------------------------------------------|
//! | `record`    | Immutable per-document records and their header   |
//! | `timeline`  | Collision-free chronology of entries              |
//! | `aggregate` | Single ordered pass over all published records    |
//! | `index`     | Search index types and stop-word exclusion        |
//! | `cloud`     | Word cloud ranking                                |

mod aggregate;
mod cloud;
mod error;
mod index;
mod record;
mod timeline;

pub use aggregate::{
    AggregateConfig, Categories, IndexMode, RawAggregate, SiteMetadata, aggregate, aggregate_at,
    aggregate_raw,
};
pub use cloud::{WordCloud, rank};
pub use error::SiteError;
pub use index::{SearchIndex, TagTable, filter, threshold};
pub use record::{DocumentRecord, Metadata};
pub use timeline::{PageRef, SLOT_WINDOW, Timeline};

#[cfg(test)]
pub(crate) use record::tests as record_tests;
