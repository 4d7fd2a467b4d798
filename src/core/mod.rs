//! Platform-agnostic core: dataset model, CSV loading, scales, colors.

pub mod color;
pub mod data;
pub mod error;
pub mod loader;
pub mod scale;

pub use color::{ColorScale, ColorStop, Rgb};
pub use data::{extent, DataPoint, Dataset};
pub use error::{ConfigError, LoadError};
pub use loader::{load_csv, read_records};
pub use scale::{nice_bounds, LinearScale};
