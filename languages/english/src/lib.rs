pub mod chance;
pub mod enricher;
pub mod pos;
pub mod register;
pub mod templates;
pub mod thesaurus;

pub use chance::{Chance, RandomChance};
pub use enricher::{ENHANCEMENT_VERSION, Enricher, SOURCE_ATTRIBUTION};
pub use pos::PartOfSpeech;
pub use register::UsageRegister;
pub use thesaurus::Thesaurus;
