pub mod conversion;
pub mod definition;
pub mod normalize;
pub mod snapshot;

pub use conversion::*;
pub use definition::*;
pub use snapshot::*;
