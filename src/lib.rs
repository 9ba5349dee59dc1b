pub mod config;
pub mod error;
pub mod province;

pub use config::GenerationParams;
pub use error::{ProvinceError, Result};
pub use province::generator::{ProvinceMapOutput, generate_province_map};
pub use province::terrain::PixelBuffer;
pub use province::{Province, ProvinceMap, ProvinceType};
