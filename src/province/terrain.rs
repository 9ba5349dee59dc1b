// src/province/terrain.rs
//! Построение масок суши, моря и границ по входным изображениям.
//!
//! Входы:
//! - изображение границ — тёмные пиксели (красный канал или единственный канал ниже порога)
//!   отмечают линии границ; линии сглажены, поэтому сравнение пороговое, а не точное;
//! - изображение суши — пиксели точно цвета океана отмечают море, всё остальное — суша.
//!
//! Нужно хотя бы одно из них. Маски заливки определяют, где растут провинции, маски
//! границ — какие пиксели потом достаются ближайшей провинции.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::GenerationParams;
use crate::error::{ProvinceError, Result};
use crate::province::Mask;

/// Декодированное изображение: 1–4 канала по 8 бит, построчно
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self> {
        if !(1..=4).contains(&channels) {
            return Err(ProvinceError::UnsupportedChannels(channels));
        }
        let expected = (width as usize) * (height as usize) * usize::from(channels);
        if data.len() != expected {
            return Err(ProvinceError::InvalidBuffer {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Красный канал (или яркость для полутоновых изображений)
    #[must_use]
    pub fn intensity(&self, idx: usize) -> u8 {
        self.data[idx * usize::from(self.channels)]
    }

    /// RGB пикселя; у полутоновых изображений все три канала равны яркости
    #[must_use]
    pub fn rgb(&self, idx: usize) -> [u8; 3] {
        let base = idx * usize::from(self.channels);
        if self.channels >= 3 {
            [self.data[base], self.data[base + 1], self.data[base + 2]]
        } else {
            let l = self.data[base];
            [l, l, l]
        }
    }

    fn classify(&self, f: impl Fn(usize) -> bool + Sync + Send) -> Mask {
        let total = (self.width as usize) * (self.height as usize);

        #[cfg(feature = "parallel")]
        let data = (0..total).into_par_iter().map(f).collect();
        #[cfg(not(feature = "parallel"))]
        let data = (0..total).map(f).collect();

        Mask {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

/// Маски одного запуска
#[derive(Debug, Clone)]
pub struct TerrainMasks {
    pub land: Mask,
    pub sea: Mask,
    pub land_fill: Mask,
    pub land_border: Mask,
    pub sea_fill: Mask,
    pub sea_border: Mask,
}

impl TerrainMasks {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.land.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.land.height
    }
}

/// Маска линий границ: интенсивность ниже порога
#[must_use]
pub fn boundary_mask(image: &PixelBuffer, threshold: u8) -> Mask {
    image.classify(|i| image.intensity(i) < threshold)
}

/// Маска моря: точное совпадение с цветом океана
#[must_use]
pub fn sea_mask(image: &PixelBuffer, ocean_color: [u8; 3]) -> Mask {
    image.classify(|i| image.rgb(i) == ocean_color)
}

/// Строит все маски по доступным изображениям
///
/// # Ошибки
/// - [`ProvinceError::MissingInputs`] — нет ни одного изображения
/// - [`ProvinceError::DimensionMismatch`] — изображения разного размера
pub fn build_masks(
    boundary: Option<&PixelBuffer>,
    land: Option<&PixelBuffer>,
    params: &GenerationParams,
) -> Result<TerrainMasks> {
    if let (Some(b), Some(l)) = (boundary, land)
        && (b.width, b.height) != (l.width, l.height)
    {
        return Err(ProvinceError::DimensionMismatch {
            boundary_width: b.width,
            boundary_height: b.height,
            land_width: l.width,
            land_height: l.height,
        });
    }

    let boundary = boundary.map(|b| boundary_mask(b, params.boundary_threshold));

    let (land, sea) = match (land, &boundary) {
        (Some(image), _) => {
            let sea = sea_mask(image, params.ocean_color);
            (sea.inverted(), sea)
        }
        // Без изображения суши вся карта считается сушей
        (None, Some(b)) => (
            Mask::filled(b.width, b.height, true),
            Mask::filled(b.width, b.height, false),
        ),
        (None, None) => return Err(ProvinceError::MissingInputs),
    };

    let masks = match boundary {
        Some(boundary) => TerrainMasks {
            land_fill: land.and_not(&boundary),
            land_border: boundary.or(&sea),
            sea_fill: sea.and_not(&boundary),
            sea_border: boundary.or(&land),
            land,
            sea,
        },
        None => TerrainMasks {
            land_fill: land.clone(),
            land_border: sea.clone(),
            sea_fill: sea.clone(),
            sea_border: land.clone(),
            land,
            sea,
        },
    };

    Ok(masks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_image(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 3]) -> PixelBuffer {
        let mut data = Vec::new();
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        PixelBuffer::new(width, height, 3, data).unwrap()
    }

    fn gray_image(width: u32, height: u32, f: impl Fn(u32, u32) -> u8) -> PixelBuffer {
        let mut data = Vec::new();
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        PixelBuffer::new(width, height, 1, data).unwrap()
    }

    #[test]
    fn buffer_length_is_validated() {
        assert!(matches!(
            PixelBuffer::new(2, 2, 3, vec![0; 11]),
            Err(ProvinceError::InvalidBuffer {
                expected: 12,
                actual: 11
            })
        ));
        assert!(matches!(
            PixelBuffer::new(1, 1, 5, vec![0; 5]),
            Err(ProvinceError::UnsupportedChannels(5))
        ));
    }

    #[test]
    fn no_inputs_is_an_error() {
        let result = build_masks(None, None, &GenerationParams::default());
        assert!(matches!(result, Err(ProvinceError::MissingInputs)));
    }

    #[test]
    fn mismatched_sizes_are_an_error() {
        let boundary = gray_image(4, 4, |_, _| 255);
        let land = rgb_image(4, 5, |_, _| [0, 200, 0]);
        let result = build_masks(Some(&boundary), Some(&land), &GenerationParams::default());
        assert!(matches!(
            result,
            Err(ProvinceError::DimensionMismatch { land_height: 5, .. })
        ));
    }

    #[test]
    fn boundary_only_treats_canvas_as_land() {
        let boundary = gray_image(4, 1, |x, _| if x == 1 { 30 } else { 255 });
        let masks = build_masks(Some(&boundary), None, &GenerationParams::default()).unwrap();

        assert!(masks.land.data.iter().all(|&v| v));
        assert!(!masks.sea.any());
        assert_eq!(masks.land_fill.data, vec![true, false, true, true]);
        assert_eq!(masks.land_border.data, vec![false, true, false, false]);
        assert!(!masks.sea_fill.any());
    }

    #[test]
    fn boundary_uses_red_channel_threshold() {
        let params = GenerationParams::default();
        // красный 127 — граница, 128 — уже нет, зелёный/синий не важны
        let boundary = rgb_image(3, 1, |x, _| match x {
            0 => [127, 255, 255],
            1 => [128, 0, 0],
            _ => [0, 255, 255],
        });
        let mask = boundary_mask(&boundary, params.boundary_threshold);
        assert_eq!(mask.data, vec![true, false, true]);
    }

    #[test]
    fn land_only_splits_by_ocean_color() {
        let params = GenerationParams::default();
        let land = rgb_image(3, 1, |x, _| match x {
            0 => params.ocean_color,
            1 => [0, 0, 254],
            _ => [90, 160, 60],
        });
        let masks = build_masks(None, Some(&land), &params).unwrap();

        assert_eq!(masks.sea.data, vec![true, false, false]);
        assert_eq!(masks.land_fill, masks.land);
        assert_eq!(masks.land_border, masks.sea);
        assert_eq!(masks.sea_fill, masks.sea);
        assert_eq!(masks.sea_border, masks.land);
    }

    #[test]
    fn both_inputs_narrow_fill_and_widen_border() {
        let params = GenerationParams::default();
        // x: 0 суша, 1 суша+граница, 2 море+граница, 3 море
        let land = rgb_image(4, 1, |x, _| {
            if x < 2 {
                [90, 160, 60]
            } else {
                params.ocean_color
            }
        });
        let boundary = gray_image(4, 1, |x, _| if x == 1 || x == 2 { 0 } else { 255 });
        let masks = build_masks(Some(&boundary), Some(&land), &params).unwrap();

        assert_eq!(masks.land_fill.data, vec![true, false, false, false]);
        assert_eq!(masks.land_border.data, vec![false, true, true, true]);
        assert_eq!(masks.sea_fill.data, vec![false, false, false, true]);
        assert_eq!(masks.sea_border.data, vec![true, true, true, false]);
        assert!(!masks.land.intersects(&masks.sea));
    }
}
