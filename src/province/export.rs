// src/province/export.rs
//! Экспорт списка провинций.
//!
//! CSV и JSON пишут одну и ту же плоскую запись [`ProvinceRecord`]:
//! `province_id`, `province_type`, `R`, `G`, `B`, `x`, `y`, центр округлён до двух знаков.
//! CSV: заголовок `province_id;R;G;B;province_type;x;y`, по строке на провинцию.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::province::{Province, ProvinceType};

pub const CSV_HEADER: &str = "province_id;R;G;B;province_type;x;y";

/// Запись провинции в экспорте
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvinceRecord {
    pub province_id: u32,
    pub province_type: ProvinceType,
    #[serde(rename = "R")]
    pub r: u8,
    #[serde(rename = "G")]
    pub g: u8,
    #[serde(rename = "B")]
    pub b: u8,
    pub x: f64,
    pub y: f64,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

impl From<&Province> for ProvinceRecord {
    fn from(p: &Province) -> Self {
        let [r, g, b] = p.color;
        Self {
            province_id: p.id,
            province_type: p.province_type,
            r,
            g,
            b,
            x: round2(p.center.0),
            y: round2(p.center.1),
        }
    }
}

/// Пишет провинции в CSV (разделитель `;`)
pub fn write_provinces_csv<W: Write>(mut writer: W, provinces: &[Province]) -> Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for rec in provinces.iter().map(ProvinceRecord::from) {
        writeln!(
            writer,
            "{};{};{};{};{};{:.2};{:.2}",
            rec.province_id,
            rec.r,
            rec.g,
            rec.b,
            rec.province_type.as_str(),
            rec.x,
            rec.y
        )?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_provinces_csv(path: impl AsRef<Path>, provinces: &[Province]) -> Result<()> {
    let file = File::create(path)?;
    write_provinces_csv(BufWriter::new(file), provinces)
}

pub fn save_provinces_json(path: impl AsRef<Path>, provinces: &[Province]) -> Result<()> {
    let records: Vec<ProvinceRecord> = provinces.iter().map(ProvinceRecord::from).collect();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writer.flush()?;
    Ok(())
}
