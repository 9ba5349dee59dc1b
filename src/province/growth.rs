// src/province/growth.rs
//! Рост провинций из семян — многоисточниковый обход в ширину.
//!
//! Все семена кладутся в одну очередь FIFO. Пиксель достаётся той провинции, чей фронт
//! дошёл до него первым; при равном расстоянии побеждает провинция, раньше попавшая в
//! очередь (порядок семян и уровень BFS). Это приближение диаграммы Вороного, а не
//! точный поиск ближайшего семени.

use std::collections::VecDeque;

use crate::error::{ProvinceError, Result};
use crate::province::seeds::ProvinceSeed;
use crate::province::{Mask, ProvinceAccumulator, ProvinceMap, ProvinceType, UNASSIGNED};

const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Результат роста одного класса поверхности
#[derive(Debug, Clone)]
pub struct GrowthResult {
    pub map: ProvinceMap,
    /// накопители в порядке идентификаторов, начиная со `start_id`
    pub accumulators: Vec<ProvinceAccumulator>,
    /// следующий свободный идентификатор
    pub next_id: u32,
}

/// Заливает маску из семян, назначая им идентификаторы `start_id, start_id + 1, ...`
///
/// # Ошибки
/// [`ProvinceError::IdOverflow`], если `start_id + seeds.len()` не помещается в `i32`.
pub fn flood_fill(
    fill_mask: &Mask,
    seeds: &[ProvinceSeed],
    start_id: u32,
    province_type: ProvinceType,
) -> Result<GrowthResult> {
    let count = seeds.len();
    let next_id = u64::try_from(count)
        .ok()
        .and_then(|n| n.checked_add(u64::from(start_id)))
        .and_then(|end| i32::try_from(end).ok())
        .ok_or(ProvinceError::IdOverflow { start_id, count })?;

    let width = fill_mask.width;
    let height = fill_mask.height;
    let mut map = ProvinceMap::unassigned(width, height);
    let mut accumulators = Vec::with_capacity(seeds.len());
    let mut queue = VecDeque::new();

    // ШАГ 1: семена
    for (i, seed) in seeds.iter().enumerate() {
        let pid = start_id + i as u32;
        map.set(seed.x, seed.y, pid as i32);
        accumulators.push(ProvinceAccumulator::new(pid, province_type, seed.x, seed.y));
        queue.push_back((seed.x, seed.y, pid));
    }

    // ШАГ 2: обход в ширину по 4-связным соседям
    while let Some((x, y, pid)) = queue.pop_front() {
        for &(dx, dy) in &DIRECTIONS {
            let nx = x as i64 + i64::from(dx);
            let ny = y as i64 + i64::from(dy);
            if nx < 0 || ny < 0 || nx >= i64::from(width) || ny >= i64::from(height) {
                continue;
            }
            let (nx, ny) = (nx as u32, ny as u32);

            if map.get(nx, ny) == UNASSIGNED && fill_mask.get(nx, ny) {
                map.set(nx, ny, pid as i32);
                accumulators[(pid - start_id) as usize].add(nx, ny);
                queue.push_back((nx, ny, pid));
            }
        }
    }

    Ok(GrowthResult {
        map,
        accumulators,
        next_id: next_id as u32,
    })
}
