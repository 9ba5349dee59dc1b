pub mod border;
pub mod color;
pub mod distance;
pub mod export;
pub mod generator;
pub mod grid;
pub mod growth;
pub mod merge;
pub mod png;
pub mod seeds;
pub mod terrain;

use serde::{Deserialize, Serialize};

pub use grid::{Mask, ProvinceMap, UNASSIGNED};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProvinceType {
    Land,
    Ocean,
}

impl ProvinceType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProvinceType::Land => "land",
            ProvinceType::Ocean => "ocean",
        }
    }
}

/// Готовая провинция: идентификатор, тип, цвет и центр масс
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Province {
    pub id: u32,
    #[serde(rename = "type")]
    pub province_type: ProvinceType,
    pub color: [u8; 3],
    /// центр масс пикселей, захваченных при росте
    pub center: (f64, f64),
}

/// Накопитель провинции во время роста
///
/// Хранит суммы координат и число пикселей; после роста превращается в [`Province`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvinceAccumulator {
    pub id: u32,
    pub province_type: ProvinceType,
    pub color: [u8; 3],
    pub sum_x: u64,
    pub sum_y: u64,
    pub count: u64,
}

impl ProvinceAccumulator {
    /// Начинает накопление с пикселя-семени
    #[must_use]
    pub fn new(id: u32, province_type: ProvinceType, x: u32, y: u32) -> Self {
        Self {
            id,
            province_type,
            color: color::color_for_id(id),
            sum_x: u64::from(x),
            sum_y: u64::from(y),
            count: 1,
        }
    }

    pub fn add(&mut self, x: u32, y: u32) {
        self.sum_x += u64::from(x);
        self.sum_y += u64::from(y);
        self.count += 1;
    }

    #[must_use]
    pub fn finish(self) -> Province {
        let count = self.count.max(1) as f64;
        Province {
            id: self.id,
            province_type: self.province_type,
            color: self.color,
            center: (self.sum_x as f64 / count, self.sum_y as f64 / count),
        }
    }
}
