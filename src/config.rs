// src/config.rs
//! Конфигурация генерации провинций
//!
//! Этот модуль определяет параметры, управляющие разбиением карты на провинции:
//! - Количество сухопутных и морских провинций
//! - Цвет океана на изображении суши (хромакей)
//! - Порог яркости для линий границ
//! - Сид генератора точек-семян
//!
//! Все структуры поддерживают сериализацию в TOML/JSON для удобной настройки через конфигурационные файлы.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Параметры генерации карты провинций
///
/// Все поля имеют значения по умолчанию, поэтому пустой TOML-файл тоже корректен.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Желаемое количество сухопутных провинций (фактическое может быть меньше)
    #[serde(default = "default_land_points")]
    pub land_points: usize,

    /// Желаемое количество морских провинций (фактическое может быть меньше)
    #[serde(default = "default_sea_points")]
    pub sea_points: usize,

    /// Точный RGB-цвет, которым на изображении суши обозначено море
    #[serde(default = "default_ocean_color")]
    pub ocean_color: [u8; 3],

    /// Пиксели изображения границ с яркостью ниже порога считаются линией границы
    #[serde(default = "default_boundary_threshold")]
    pub boundary_threshold: u8,

    /// Сид генератора точек-семян (детерминированная генерация)
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl GenerationParams {
    /// Загружает параметры из TOML-файла
    ///
    /// # Пример
    /// ```toml
    /// # provinces.toml
    /// land_points = 400
    /// sea_points = 80
    /// ocean_color = [0, 0, 255]
    /// ```
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let params: Self = toml::from_str(&contents)?;
        Ok(params)
    }
}

fn default_land_points() -> usize {
    200
}
fn default_sea_points() -> usize {
    50
}
fn default_ocean_color() -> [u8; 3] {
    [0, 0, 255]
}
fn default_boundary_threshold() -> u8 {
    128
}
fn default_seed() -> u64 {
    12345
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            land_points: default_land_points(),
            sea_points: default_sea_points(),
            ocean_color: default_ocean_color(),
            boundary_threshold: default_boundary_threshold(),
            seed: default_seed(),
        }
    }
}
