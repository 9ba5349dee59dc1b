//! Сквозные тесты генерации карты провинций

use std::cmp::Ordering;
use std::collections::HashSet;

use provmap::province::border::assign_borders;
use provmap::province::export::{
    CSV_HEADER, ProvinceRecord, save_provinces_csv, save_provinces_json,
};
use provmap::province::growth::flood_fill;
use provmap::province::merge::combine_maps;
use provmap::province::png::load_pixel_buffer;
use provmap::province::seeds::ProvinceSeed;
use provmap::province::terrain::build_masks;
use provmap::province::{ProvinceAccumulator, ProvinceMap, UNASSIGNED};
use provmap::{
    GenerationParams, PixelBuffer, ProvinceError, ProvinceType, generate_province_map,
};

const LAND_RGB: [u8; 3] = [70, 150, 60];

fn params(land_points: usize, sea_points: usize) -> GenerationParams {
    GenerationParams {
        land_points,
        sea_points,
        ..GenerationParams::default()
    }
}

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

/// Остров в центре, вокруг море
fn island(width: u32, height: u32) -> PixelBuffer {
    let ocean = GenerationParams::default().ocean_color;
    rgb_image(width, height, |x, y| {
        let dx = x as i64 - i64::from(width / 2);
        let dy = y as i64 - i64::from(height / 2);
        if dx * dx + dy * dy < i64::from(width * width / 9) {
            LAND_RGB
        } else {
            ocean
        }
    })
}

#[test]
fn all_land_four_by_four() {
    let boundary = gray_image(4, 4, |_, _| 255);
    let out = generate_province_map(Some(&boundary), None, &params(4, 0)).unwrap();

    assert!(!out.provinces.is_empty() && out.provinces.len() <= 4);
    assert!(out.provinces.iter().all(|p| p.province_type == ProvinceType::Land));
    let ids: Vec<u32> = out.provinces.iter().map(|p| p.id).collect();
    assert_eq!(ids, (0..out.provinces.len() as u32).collect::<Vec<_>>());

    assert!(!out.map.has_unassigned());
    assert!(out.image.pixels().all(|p| p.0 != [0, 0, 0]));
}

#[test]
fn fully_ocean_land_image_gives_only_sea() {
    let ocean = GenerationParams::default().ocean_color;
    let land = rgb_image(12, 12, |_, _| ocean);
    let out = generate_province_map(None, Some(&land), &params(10, 4)).unwrap();

    assert!(!out.provinces.is_empty());
    assert!(out.provinces.iter().all(|p| p.province_type == ProvinceType::Ocean));
    // сухопутных нет, поэтому морские начинаются с 0
    assert_eq!(out.provinces[0].id, 0);
    assert!(!out.map.has_unassigned());
}

#[test]
fn diagonal_boundary_splits_canvas() {
    // ячейки (1, 0) и (0, 1) сетки 2×2 целиком по разные стороны диагонали,
    // поэтому семена есть с обеих сторон
    let boundary = gray_image(16, 16, |x, y| if x == y { 0 } else { 255 });
    let out = generate_province_map(Some(&boundary), None, &params(4, 0)).unwrap();
    assert!(!out.map.has_unassigned());

    let mut upper = HashSet::new();
    let mut lower = HashSet::new();
    for y in 0..16 {
        for x in 0..16 {
            match x.cmp(&y) {
                Ordering::Greater => upper.insert(out.map.get(x, y)),
                Ordering::Less => lower.insert(out.map.get(x, y)),
                Ordering::Equal => continue,
            };
        }
    }
    assert!(!upper.is_empty() && !lower.is_empty());
    assert!(upper.is_disjoint(&lower));
}

#[test]
fn diagonal_boundary_with_one_seed_per_side() {
    let boundary = gray_image(16, 16, |x, y| if x == y { 0 } else { 255 });
    let masks = build_masks(Some(&boundary), None, &GenerationParams::default()).unwrap();
    let seeds = [ProvinceSeed { x: 15, y: 0 }, ProvinceSeed { x: 0, y: 15 }];

    let mut growth = flood_fill(&masks.land_fill, &seeds, 0, ProvinceType::Land).unwrap();
    assign_borders(&mut growth.map, &masks.land_border);
    let provinces: Vec<_> = growth
        .accumulators
        .into_iter()
        .map(ProvinceAccumulator::finish)
        .collect();
    let sea_map = ProvinceMap::unassigned(16, 16);
    let map = combine_maps(&growth.map, &sea_map, &masks.land, &masks.sea);
    let image = map.to_rgb_image(&provinces);

    for y in 0..16 {
        for x in 0..16 {
            let id = map.get(x, y);
            match x.cmp(&y) {
                Ordering::Greater => assert_eq!(id, 0, "({x}, {y})"),
                Ordering::Less => assert_eq!(id, 1, "({x}, {y})"),
                // пиксель линии равноудалён от обеих сторон
                Ordering::Equal => assert!(id == 0 || id == 1),
            }
            assert_eq!(image.get_pixel(x, y).0, provinces[id as usize].color);
        }
    }
    assert_ne!(provinces[0].color, provinces[1].color);
}

#[test]
fn land_and_sea_ids_are_disjoint_ranges() {
    let land = island(40, 40);
    let out = generate_province_map(None, Some(&land), &params(9, 9)).unwrap();

    let land_ids: Vec<u32> = out
        .provinces
        .iter()
        .filter(|p| p.province_type == ProvinceType::Land)
        .map(|p| p.id)
        .collect();
    let sea_ids: Vec<u32> = out
        .provinces
        .iter()
        .filter(|p| p.province_type == ProvinceType::Ocean)
        .map(|p| p.id)
        .collect();

    assert!(!land_ids.is_empty() && !sea_ids.is_empty());
    assert_eq!(land_ids, (0..land_ids.len() as u32).collect::<Vec<_>>());
    let first_sea = land_ids.len() as u32;
    assert_eq!(
        sea_ids,
        (first_sea..first_sea + sea_ids.len() as u32).collect::<Vec<_>>()
    );
}

#[test]
fn sea_pixels_belong_to_sea_provinces() {
    let land = island(40, 40);
    let out = generate_province_map(None, Some(&land), &params(9, 9)).unwrap();
    let ocean = GenerationParams::default().ocean_color;

    for y in 0..40 {
        for x in 0..40 {
            let id = out.map.get(x, y);
            assert_ne!(id, UNASSIGNED);
            let province = &out.provinces[id as usize];
            let is_sea = land.rgb((y * 40 + x) as usize) == ocean;
            let expected = if is_sea {
                ProvinceType::Ocean
            } else {
                ProvinceType::Land
            };
            assert_eq!(province.province_type, expected, "({x}, {y})");
        }
    }
}

#[test]
fn sea_is_skipped_without_land_image() {
    let boundary = gray_image(10, 10, |_, _| 255);
    let out = generate_province_map(Some(&boundary), None, &params(4, 25)).unwrap();
    assert!(out.provinces.iter().all(|p| p.province_type == ProvinceType::Land));
}

#[test]
fn runs_are_deterministic() {
    let land = island(32, 24);
    let boundary = gray_image(32, 24, |x, _| if x == 16 { 10 } else { 250 });
    let a = generate_province_map(Some(&boundary), Some(&land), &params(6, 5)).unwrap();
    let b = generate_province_map(Some(&boundary), Some(&land), &params(6, 5)).unwrap();

    assert_eq!(a.map, b.map);
    assert_eq!(a.provinces, b.provinces);
    assert_eq!(a.image.as_raw(), b.image.as_raw());
}

#[test]
fn single_region_centroid_is_pixel_mean() {
    // вся карта — одна провинция без границ
    let boundary = gray_image(5, 3, |_, _| 255);
    let out = generate_province_map(Some(&boundary), None, &params(1, 0)).unwrap();

    assert_eq!(out.provinces.len(), 1);
    assert_eq!(out.provinces[0].center, (2.0, 1.0));
}

#[test]
fn centroid_ignores_border_pixels() {
    // столбец 0 — граница, провинция растёт по столбцам 1..=4
    let boundary = gray_image(5, 3, |x, _| if x == 0 { 0 } else { 255 });
    let out = generate_province_map(Some(&boundary), None, &params(1, 0)).unwrap();

    assert_eq!(out.provinces.len(), 1);
    assert_eq!(out.provinces[0].center, (2.5, 1.0));
    assert!(out.map.data.iter().all(|&id| id == 0));
}

#[test]
fn missing_inputs_fail_fast() {
    let result = generate_province_map(None, None, &params(4, 4));
    assert!(matches!(result, Err(ProvinceError::MissingInputs)));
}

#[test]
fn mismatched_inputs_fail_fast() {
    let boundary = gray_image(8, 8, |_, _| 255);
    let land = island(8, 9);
    let result = generate_province_map(Some(&boundary), Some(&land), &params(4, 4));
    assert!(matches!(result, Err(ProvinceError::DimensionMismatch { .. })));
}

#[test]
fn no_regions_give_black_raster() {
    let boundary = gray_image(6, 6, |_, _| 255);
    let out = generate_province_map(Some(&boundary), None, &params(0, 0)).unwrap();
    assert!(out.provinces.is_empty());
    assert!(out.image.as_raw().iter().all(|&c| c == 0));
    assert!(out.map.data.iter().all(|&id| id == UNASSIGNED));
}

#[test]
fn exports_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let land = island(24, 24);
    let out = generate_province_map(None, Some(&land), &params(4, 4)).unwrap();

    let png = dir.path().join("provinces.png");
    out.map.save_as_png(&out.provinces, &png).unwrap();
    let reloaded = load_pixel_buffer(&png).unwrap();
    assert_eq!(reloaded.data, out.image.as_raw().clone());

    let csv = dir.path().join("provinces.csv");
    save_provinces_csv(&csv, &out.provinces).unwrap();
    let text = std::fs::read_to_string(&csv).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(CSV_HEADER));
    assert_eq!(lines.count(), out.provinces.len());

    let json = dir.path().join("provinces.json");
    save_provinces_json(&json, &out.provinces).unwrap();
    let records: Vec<ProvinceRecord> =
        serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(records.len(), out.provinces.len());
    for (rec, province) in records.iter().zip(&out.provinces) {
        assert_eq!(rec.province_id, province.id);
        assert_eq!([rec.r, rec.g, rec.b], province.color);
        assert!((rec.x - province.center.0).abs() <= 0.005 + 1e-9);
        assert!((rec.y - province.center.1).abs() <= 0.005 + 1e-9);
    }
}
