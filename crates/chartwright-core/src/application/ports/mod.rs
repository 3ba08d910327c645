//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `chartwright-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: stat, write, append, read
//!   - `ValuesCodec`: values document (de)serialization
//!   - `ChartStore`: whole-chart load/save
//!   - `Diagnostics`: overwrite warnings and other non-fatal messages
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{ChartStore, Diagnostics, EntryKind, Filesystem, ValuesCodec};
