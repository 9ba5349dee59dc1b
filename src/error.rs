//! Ошибки генерации карты провинций

use thiserror::Error;

/// Ошибки, возникающие при построении карты провинций и её экспорте
#[derive(Debug, Error)]
pub enum ProvinceError {
    /// Нет ни изображения границ, ни изображения суши — размер карты не определить
    #[error("need at least a boundary or a land image to determine map size")]
    MissingInputs,

    /// Изображения границ и суши имеют разные размеры
    #[error(
        "input size mismatch: boundary is {boundary_width}x{boundary_height}, land is {land_width}x{land_height}"
    )]
    DimensionMismatch {
        boundary_width: u32,
        boundary_height: u32,
        land_width: u32,
        land_height: u32,
    },

    /// Длина буфера не совпадает с заявленными размерами
    #[error("invalid pixel buffer: expected {expected} bytes, got {actual}")]
    InvalidBuffer { expected: usize, actual: usize },

    /// Поддерживаются только 1–4 канала
    #[error("unsupported channel count: {0}")]
    UnsupportedChannels(u8),

    /// Идентификаторы провинций не помещаются в метку `i32`
    #[error("province ids overflow: start {start_id} with {count} seeds exceeds i32::MAX")]
    IdOverflow { start_id: u32, count: usize },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Результат операций с картой провинций
pub type Result<T> = std::result::Result<T, ProvinceError>;
