use clap::Parser;
use simplelog::{ColorChoice, CombinedLogger, TerminalMode, TermLogger};
use cli::Cli;

mod cli;
mod fs_utils;
mod generate;
mod manifest;
mod render;
mod scale;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    CombinedLogger::init(
        vec![
            TermLogger::new(cli.rust_log.into(), simplelog::Config::default(), TerminalMode::Mixed, ColorChoice::Auto)
        ]
    )?;

    let generated = generate::generate_icon_set(&cli.svg, &cli.manifest, cli.output_name, cli.idiom)?;

    println!("{0} app icon PNGs generated and {1} updated.", generated, cli.manifest.display());

    Ok(())
}
