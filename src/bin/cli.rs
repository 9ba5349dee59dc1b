use clap::Parser;
use provmap::province::export::{save_provinces_csv, save_provinces_json};
use provmap::province::png::load_pixel_buffer;
use provmap::{GenerationParams, generate_province_map};
use std::path::PathBuf;
use tracing::Level;

/// Генератор карты провинций по маскам суши и границ
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Изображение границ: тёмные линии разделяют провинции
    #[arg(short, long)]
    boundary: Option<PathBuf>,

    /// Изображение суши: цвет океана отмечает море
    #[arg(short, long)]
    land: Option<PathBuf>,

    /// Путь к конфигурационному файлу в формате TOML
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Количество сухопутных провинций (перекрывает конфиг)
    #[arg(long)]
    land_points: Option<usize>,

    /// Количество морских провинций (перекрывает конфиг)
    #[arg(long)]
    sea_points: Option<usize>,

    /// Путь для сохранения карты провинций
    #[arg(short, long, default_value = "provinces.png")]
    output: PathBuf,

    /// Экспорт списка провинций в CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Экспорт списка провинций в JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Подробный лог
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .init();

    let mut params = match &cli.config {
        Some(path) => {
            println!("🔍 Загрузка конфигурации...");
            GenerationParams::from_toml_file(path)?
        }
        None => GenerationParams::default(),
    };
    if let Some(n) = cli.land_points {
        params.land_points = n;
    }
    if let Some(n) = cli.sea_points {
        params.sea_points = n;
    }

    println!("🖼️ Загрузка изображений...");
    let boundary = cli.boundary.as_ref().map(load_pixel_buffer).transpose()?;
    let land = cli.land.as_ref().map(load_pixel_buffer).transpose()?;

    println!(
        "Генерация провинций (суша: {}, море: {})...",
        params.land_points, params.sea_points
    );
    let output = generate_province_map(boundary.as_ref(), land.as_ref(), &params)?;

    println!("Сохранение в {:?}", cli.output);
    output.image.save(&cli.output)?;

    if let Some(path) = &cli.csv {
        println!("Экспорт CSV в {path:?}");
        save_provinces_csv(path, &output.provinces)?;
    }
    if let Some(path) = &cli.json {
        println!("Экспорт JSON в {path:?}");
        save_provinces_json(path, &output.provinces)?;
    }

    println!("\nГотово! Провинций: {}.", output.provinces.len());
    Ok(())
}
