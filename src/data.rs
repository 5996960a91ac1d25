//! Rate data: the in-memory FX core and the sources that feed it

pub mod fx;
pub mod sources;

pub use fx::{RateRecord, RateResolver, RateTable, SharedRateTable};
pub use sources::{open_source, RateSource};
