// src/province/merge.rs
//! Сведение карт суши и моря в итоговую карту провинций.

use crate::province::border::fill_from_nearest;
use crate::province::{Mask, ProvinceMap};

/// Сводит карты суши и моря в одну
///
/// Сначала переносятся метки суши (где `land_map >= 0` и пиксель — суша), затем метки
/// моря (где `sea_map >= 0` и пиксель — море). Море пишется вторым и при пересечении
/// масок побеждает. Оставшиеся неразмеченные пиксели (края, недостижимые анклавы)
/// получают метку ближайшей провинции, так что при наличии хоть одной провинции дыр не
/// остаётся.
#[must_use]
pub fn combine_maps(
    land_map: &ProvinceMap,
    sea_map: &ProvinceMap,
    land_mask: &Mask,
    sea_mask: &Mask,
) -> ProvinceMap {
    debug_assert!(
        !land_mask.intersects(sea_mask),
        "land and sea masks must be disjoint"
    );

    let mut combined = ProvinceMap::unassigned(land_map.width, land_map.height);

    for (idx, cell) in combined.data.iter_mut().enumerate() {
        if land_map.data[idx] >= 0 && land_mask.data[idx] {
            *cell = land_map.data[idx];
        }
        if sea_map.data[idx] >= 0 && sea_mask.data[idx] {
            *cell = sea_map.data[idx];
        }
    }

    // Заполняем оставшиеся области ближайшей провинцией
    if combined.has_unassigned() {
        let missing = combined.assigned_mask().inverted();
        fill_from_nearest(&mut combined, &missing);
    }

    combined
}
