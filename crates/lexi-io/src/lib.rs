pub mod photo;

pub use photo::{PhotoStore, ProfilePhoto, StorageError};
