pub mod convert;
pub mod error;
pub mod loaders;
pub mod types;
pub mod validate;

pub use convert::{
    Conversion, ConversionReport, Converter, compute_statistics, summarize, write_outputs,
};
pub use error::{ConvertError, RowError};
pub use loaders::xlsx::XlsxLoader;
pub use types::{Cell, SheetRow};
pub use validate::{ValidationError, ValidationSummary, validate_output};
