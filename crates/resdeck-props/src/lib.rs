//! Per-cell grid properties and the keyword-indexed container that owns them.
//!
//! # Architecture
//!
//! ```text
//! GridProperties<T> (container)
//! ├── supported: IndexMap<String, KeywordDescriptor<T>>  (fixed)
//! └── instantiated: IndexMap<String, GridProperty<T>>    (grows lazily)
//!     └── GridProperty<T> → Vec<T> of nx*ny*nz cells
//! ```
//!
//! A keyword is in one of three states with respect to a container:
//! not supported, supported but not yet instantiated, or instantiated.
//! [`GridProperties::supports`] and [`GridProperties::has`] tell them
//! apart, and [`GridProperties::get_initialized`] reports which of the
//! first two applies when a lookup fails.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod container;
pub mod error;
pub mod keywords;
pub mod property;

pub use container::GridProperties;
pub use error::PropertyError;
pub use property::GridProperty;
