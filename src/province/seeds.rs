// src/province/seeds.rs
//! Выбор точек-семян провинций.
//!
//! Маска делится на сетку `g × g`, где `g = ceil(sqrt(n))`. В каждой ячейке, где есть
//! хотя бы один пиксель маски, случайно выбирается ровно один такой пиксель
//! (стратифицированная выборка с джиттером). Пустые ячейки пропускаются, поэтому точек
//! может получиться меньше `n`. Если непустых ячеек больше `n`, лишние кандидаты
//! отбрасываются случайно с сохранением порядка ячеек — результат никогда не превышает `n`.

use rand::Rng;
use rand::seq::index;

use crate::province::Mask;

/// Точка-семя провинции (координаты пикселя)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvinceSeed {
    pub x: u32,
    pub y: u32,
}

/// Число ячеек сетки по каждой оси для `num_points` точек
#[must_use]
pub fn grid_size(num_points: usize) -> usize {
    let root = num_points.isqrt();
    if root * root < num_points {
        root + 1
    } else {
        root.max(1)
    }
}

/// Генерирует до `num_points` семян внутри маски
///
/// Генератор передаётся явно: при одинаковых маске, `num_points` и сиде результат одинаков.
pub fn generate_jitter_seeds<R: Rng + ?Sized>(
    mask: &Mask,
    num_points: usize,
    rng: &mut R,
) -> Vec<ProvinceSeed> {
    if num_points == 0 {
        return Vec::new();
    }

    let width = mask.width as usize;
    let height = mask.height as usize;
    let grid = grid_size(num_points);

    let mut candidates = Vec::with_capacity(grid * grid);
    let mut cell_pixels = Vec::new();

    for gy in 0..grid {
        let y0 = gy * height / grid;
        let y1 = (gy + 1) * height / grid;

        for gx in 0..grid {
            let x0 = gx * width / grid;
            let x1 = (gx + 1) * width / grid;

            cell_pixels.clear();
            for y in y0..y1 {
                for x in x0..x1 {
                    if mask.data[y * width + x] {
                        cell_pixels.push(ProvinceSeed {
                            x: x as u32,
                            y: y as u32,
                        });
                    }
                }
            }

            if cell_pixels.is_empty() {
                continue;
            }

            let i = rng.gen_range(0..cell_pixels.len());
            candidates.push(cell_pixels[i]);
        }
    }

    if candidates.len() <= num_points {
        return candidates;
    }

    let mut keep = index::sample(rng, candidates.len(), num_points).into_vec();
    keep.sort_unstable();
    keep.into_iter().map(|i| candidates[i]).collect()
}
