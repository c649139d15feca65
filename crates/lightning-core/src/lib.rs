pub mod error;
pub mod fs;
pub mod preprocess;
pub mod types;

pub use error::StoreError;
pub use types::{
    DictionaryDocument, EnhancementStats, FrequencyRanges, Metadata, Statistics, WordRecord,
};
