pub mod adapter;
pub mod serialization;
pub mod store;
pub mod traits;

pub use adapter::StorageAdapter;
pub use serialization::JsonSerializer;
pub use store::*;
pub use traits::*;
