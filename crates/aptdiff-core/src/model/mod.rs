pub mod category;
pub mod snapshot;
pub mod value;

pub use category::{Category, FieldLayout};
pub use snapshot::{CategoryMap, RawSnapshot, Snapshot};
pub use value::Value;
