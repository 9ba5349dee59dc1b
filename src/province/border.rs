// src/province/border.rs
//! Разметка пикселей границ по ближайшей провинции.
//!
//! Пиксели маски границ (линии границ, противоположный тип поверхности) в росте не
//! участвуют. После роста каждый из них получает идентификатор ближайшего по евклидовой
//! метрике размеченного пикселя.
//!
//! Накопители центров масс при этом не меняются: центр провинции отражает только
//! пиксели, захваченные при росте.

use crate::province::distance::NearestFeatureMap;
use crate::province::{Mask, ProvinceMap};

/// Назначает пикселям `border_mask` идентификатор ближайшей провинции (на месте)
///
/// Ничего не делает, если маска границ пуста или на карте нет ни одного размеченного пикселя.
pub fn assign_borders(map: &mut ProvinceMap, border_mask: &Mask) {
    if !border_mask.any() {
        return;
    }
    fill_from_nearest(map, border_mask);
}

/// Заполняет пиксели `targets` значением ближайшего размеченного пикселя.
/// Общая часть для границ и для финального заполнения дыр.
pub(crate) fn fill_from_nearest(map: &mut ProvinceMap, targets: &Mask) {
    let Some(field) = NearestFeatureMap::compute(&map.assigned_mask()) else {
        return;
    };

    // размеченный пиксель ближайший сам себе, поэтому запись на месте не меняет источники
    for (idx, _) in targets.data.iter().enumerate().filter(|&(_, &t)| t) {
        map.data[idx] = map.data[field.nearest[idx]];
    }
}
