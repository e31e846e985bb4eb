use std::path::PathBuf;
use clap::{Parser, ValueEnum};
use indicatif::ProgressStyle;
use log::LevelFilter;

#[derive(Parser, Clone, Debug)]
#[command(about = "Rasterizes an SVG app icon at every size the icon manifest requires")]
pub struct Cli {
    #[clap(env, long, default_value = "assets/appicon.svg")]
    pub svg: PathBuf,
    #[clap(env, long, default_value = "Assets.xcassets/AppIcon.appiconset/Contents.json")]
    pub manifest: PathBuf,
    #[clap(env, long, default_value = "appicon")]
    pub output_name: String,
    #[clap(env, long, default_value = "mac")]
    pub idiom: String,
    #[clap(env, long, default_value = "info")]
    pub rust_log: LogLevel,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

pub fn render_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{bar:40.cyan/blue} [{pos}/{len}] {wide_msg}")
        .unwrap()
}
