// src/province/png.rs
//! Визуализация провинций и загрузка входных изображений
//!
//! Этот модуль отвечает за границу между алгоритмом и файлами:
//! - Загрузку изображений границ и суши в [`PixelBuffer`]
//! - Преобразование карты `province_id` в RGB-изображение
//! - Сохранение результата в PNG
//!
//! ## Архитектура
//!
//! 1. **`ProvinceMap`** хранит только `province_id` (или `-1` для неразмеченных пикселей),
//!    цвета берутся из списка [`Province`].
//!
//! 2. **Таблица цветов**: вектор размером `max_id + 1`, индекс — `province_id`.
//!    Неиспользуемые ячейки остаются чёрными (`[0, 0, 0]`), как и неразмеченные пиксели.
//!
//! 3. **Сохранение в PNG** через библиотеку `image`.
//!
//! ## Пример использования
//! ```no_run
//! use provmap::province::png::load_pixel_buffer;
//!
//! let boundary = load_pixel_buffer("input/boundary.png")?;
//! # Ok::<(), provmap::ProvinceError>(())
//! ```

use std::path::Path;

use image::{DynamicImage, RgbImage};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Result;
use crate::province::terrain::PixelBuffer;
use crate::province::{Province, ProvinceMap};

impl PixelBuffer {
    /// Переводит декодированное изображение в буфер пикселей
    ///
    /// Полутоновые изображения сохраняют один канал (яркость), цветные приводятся к
    /// RGB или RGBA (при наличии альфа-канала).
    pub fn from_dynamic_image(image: &DynamicImage) -> Result<Self> {
        let color = image.color();
        let (width, height) = (image.width(), image.height());

        if !color.has_color() {
            PixelBuffer::new(width, height, 1, image.to_luma8().into_raw())
        } else if color.has_alpha() {
            PixelBuffer::new(width, height, 4, image.to_rgba8().into_raw())
        } else {
            PixelBuffer::new(width, height, 3, image.to_rgb8().into_raw())
        }
    }
}

/// Загружает изображение (PNG, JPEG, BMP, GIF...) с диска
pub fn load_pixel_buffer(path: impl AsRef<Path>) -> Result<PixelBuffer> {
    let image = image::open(path)?;
    PixelBuffer::from_dynamic_image(&image)
}

/// Таблица цветов `province_id → RGB` размером `max_id + 1`
#[must_use]
pub fn color_lut(provinces: &[Province]) -> Vec<[u8; 3]> {
    let Some(max_id) = provinces.iter().map(|p| p.id).max() else {
        return Vec::new();
    };

    let mut lut = vec![[0, 0, 0]; max_id as usize + 1];
    for province in provinces {
        lut[province.id as usize] = province.color;
    }
    lut
}

impl ProvinceMap {
    /// Преобразует карту провинций в RGB-изображение
    ///
    /// Пиксели без провинции и идентификаторы вне таблицы остаются чёрными.
    #[must_use]
    pub fn to_rgb_image(&self, provinces: &[Province]) -> RgbImage {
        let lut = color_lut(provinces);
        let mut image = RgbImage::new(self.width, self.height);
        let buffer: &mut [u8] = &mut image;

        #[cfg(feature = "parallel")]
        let pixels = buffer.par_chunks_exact_mut(3).zip(self.data.par_iter());
        #[cfg(not(feature = "parallel"))]
        let pixels = buffer.chunks_exact_mut(3).zip(self.data.iter());

        pixels.for_each(|(pixel, &pid)| {
            if let Ok(idx) = usize::try_from(pid)
                && let Some(color) = lut.get(idx)
            {
                pixel.copy_from_slice(color);
            }
        });

        image
    }

    /// Сохраняет карту провинций в PNG-файл
    pub fn save_as_png(&self, provinces: &[Province], path: impl AsRef<Path>) -> Result<()> {
        self.to_rgb_image(provinces).save(path)?;
        Ok(())
    }
}
