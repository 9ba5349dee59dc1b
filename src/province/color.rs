// src/province/color.rs
//! Цвета провинций.
//!
//! Цвет — чистая функция идентификатора: генератор сидируется значением `id + 1`,
//! поэтому цвет не зависит от порядка роста и одинаков между запусками.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Каналы ниже этого значения считаются «почти чёрными»
const DARK_LIMIT: u8 = 20;
/// Сдвиг каналов для почти чёрных цветов
const DARK_SHIFT: u8 = 50;

/// Цвет провинции по её идентификатору
#[must_use]
pub fn color_for_id(id: u32) -> [u8; 3] {
    let mut rng = ChaCha8Rng::seed_from_u64(u64::from(id) + 1);
    color_from_rng(&mut rng)
}

/// Берёт три канала из `[1, 255]`; почти чёрный цвет сдвигается на `+50 mod 256`,
/// чтобы не сливаться с фоном.
pub fn color_from_rng<R: Rng + ?Sized>(rng: &mut R) -> [u8; 3] {
    let mut color = [
        rng.gen_range(1..=255),
        rng.gen_range(1..=255),
        rng.gen_range(1..=255),
    ];

    if color.iter().all(|&c| c < DARK_LIMIT) {
        for c in &mut color {
            *c = c.wrapping_add(DARK_SHIFT);
        }
    }

    color
}
