pub mod config;
pub mod error;
pub mod generator;
pub mod gradient;
pub mod models;
pub mod utils;

pub use config::{Cli, Config, OutputFormat};
pub use error::FormatError;
pub use generator::Generator;
pub use gradient::{gradient, lerp};
pub use models::{Rgb, format_rgb};
