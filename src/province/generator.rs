// src/province/generator.rs
//! Полный конвейер генерации карты провинций:
//! маски → семена → рост → разметка границ (суша, затем море) → сведение и растр.

use image::RgbImage;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::config::GenerationParams;
use crate::error::Result;
use crate::province::border::assign_borders;
use crate::province::growth::flood_fill;
use crate::province::merge::combine_maps;
use crate::province::seeds::generate_jitter_seeds;
use crate::province::terrain::{PixelBuffer, build_masks};
use crate::province::{Mask, Province, ProvinceAccumulator, ProvinceMap, ProvinceType};

/// Провинции одного типа поверхности
#[derive(Debug, Clone)]
pub struct PhaseResult {
    pub map: ProvinceMap,
    pub provinces: Vec<Province>,
    pub next_id: u32,
}

/// Итог генерации
#[derive(Debug, Clone)]
pub struct ProvinceMapOutput {
    /// сводная карта `province_id`
    pub map: ProvinceMap,
    pub image: RgbImage,
    /// провинции по возрастанию id: сначала суша, затем море
    pub provinces: Vec<Province>,
}

/// Строит провинции одного типа: семена, рост, разметка границ
///
/// При `num_points == 0`, пустой маске заливки или отсутствии семян возвращает пустую
/// карту без провинций и `next_id == start_id`.
///
/// # Ошибки
/// [`crate::ProvinceError::IdOverflow`], если идентификаторы не помещаются в `i32`.
pub fn create_province_map<R: Rng + ?Sized>(
    fill_mask: &Mask,
    border_mask: &Mask,
    num_points: usize,
    start_id: u32,
    province_type: ProvinceType,
    rng: &mut R,
) -> Result<PhaseResult> {
    let empty = || PhaseResult {
        map: ProvinceMap::unassigned(fill_mask.width, fill_mask.height),
        provinces: Vec::new(),
        next_id: start_id,
    };

    if num_points == 0 || !fill_mask.any() {
        return Ok(empty());
    }

    let mut seeds = generate_jitter_seeds(fill_mask, num_points, rng);
    seeds.retain(|s| fill_mask.get(s.x, s.y));
    debug!(
        "{:?}: {} семян из {} запрошенных",
        province_type,
        seeds.len(),
        num_points
    );

    if seeds.is_empty() {
        return Ok(empty());
    }

    let mut growth = flood_fill(fill_mask, &seeds, start_id, province_type)?;
    assign_borders(&mut growth.map, border_mask);

    let provinces = growth
        .accumulators
        .into_iter()
        .map(ProvinceAccumulator::finish)
        .collect();

    Ok(PhaseResult {
        map: growth.map,
        provinces,
        next_id: growth.next_id,
    })
}

/// Генерирует карту провинций по изображениям границ и/или суши
///
/// Морские провинции строятся, только если задано изображение суши и `sea_points > 0`.
///
/// # Ошибки
/// Ошибки конфигурации из [`build_masks`]: нет входов или размеры не совпадают.
/// Переполнение идентификаторов из [`create_province_map`].
pub fn generate_province_map(
    boundary: Option<&PixelBuffer>,
    land: Option<&PixelBuffer>,
    params: &GenerationParams,
) -> Result<ProvinceMapOutput> {
    let masks = build_masks(boundary, land, params)?;
    let (width, height) = (masks.width(), masks.height());
    debug!("Маски построены: {}×{}", width, height);

    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
    let land_phase = create_province_map(
        &masks.land_fill,
        &masks.land_border,
        params.land_points,
        0,
        ProvinceType::Land,
        &mut rng,
    )?;

    let sea_phase = if params.sea_points > 0 && land.is_some() {
        // у моря свой генератор с тем же сидом: его семена не зависят от суши
        let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
        create_province_map(
            &masks.sea_fill,
            &masks.sea_border,
            params.sea_points,
            land_phase.next_id,
            ProvinceType::Ocean,
            &mut rng,
        )?
    } else {
        PhaseResult {
            map: ProvinceMap::unassigned(width, height),
            provinces: Vec::new(),
            next_id: land_phase.next_id,
        }
    };

    let map = combine_maps(&land_phase.map, &sea_phase.map, &masks.land, &masks.sea);

    let mut provinces = land_phase.provinces;
    provinces.extend(sea_phase.provinces);
    let image = map.to_rgb_image(&provinces);

    info!(
        "Сгенерировано провинций: {} (суша {}, море {})",
        provinces.len(),
        land_phase.next_id,
        sea_phase.next_id - land_phase.next_id
    );

    Ok(ProvinceMapOutput {
        map,
        image,
        provinces,
    })
}
