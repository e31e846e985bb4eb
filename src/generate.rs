use std::path::{Path, PathBuf};
use indicatif::ProgressBar;
use log::info;
use crate::cli;
use crate::fs_utils::ensure_dir;
use crate::manifest::IconManifest;
use crate::render::{Renderer, SvgRenderer};
use crate::scale::{IconSize, Scale};

pub fn generate_icon_set(
    svg: &Path,
    manifest_path: &Path,
    output_name: String,
    idiom: String,
) -> anyhow::Result<usize> {
    // Opening the SVG first means a missing source aborts before the
    // manifest is touched.
    let renderer = SvgRenderer::open(svg)?;
    let mut manifest = IconManifest::load_from(manifest_path)?;

    // PNGs land next to the manifest.
    let output_dir = match manifest_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let generator = IconSetGenerator::new(renderer, output_name, idiom, output_dir);
    let generated = generator.run(&mut manifest)?;
    manifest.save_to(manifest_path)?;

    Ok(generated)
}

pub struct IconSetGenerator<R: Renderer> {
    renderer: R,
    output_name: String,
    idiom: String,
    output_dir: PathBuf,
}

impl<R: Renderer> IconSetGenerator<R> {
    pub fn new(renderer: R, output_name: String, idiom: String, output_dir: PathBuf) -> Self {
        IconSetGenerator {
            renderer,
            output_name,
            idiom,
            output_dir,
        }
    }

    pub fn run(&self, manifest: &mut IconManifest) -> anyhow::Result<usize> {
        ensure_dir(&self.output_dir)?;

        let render_bar = ProgressBar::new(manifest.image_count() as u64)
            .with_style(cli::render_progress_style());
        let mut generated = 0;

        for mut entry in manifest.entries_mut() {
            render_bar.inc(1);

            let (idiom, size, scale) = match (entry.idiom(), entry.size(), entry.scale()) {
                (Some(idiom), Some(size), Some(scale)) => (idiom, size, scale),
                _ => continue,
            };
            if idiom != self.idiom || size.is_empty() || scale.is_empty() {
                continue;
            }

            let size: IconSize = size.parse()?;
            let scale: Scale = scale.parse()?;
            let pixels = size.pixels(scale)?;

            let filename = self.build_filename(size, scale);
            let output_path = self.output_dir.join(&filename);

            render_bar.set_message(filename.clone());
            self.renderer.render(&output_path, pixels, pixels)?;
            entry.set_filename(&filename);

            info!("Rendered {0} at {1}x{1}", filename, pixels);
            generated += 1;
        }

        render_bar.finish();

        Ok(generated)
    }

    fn build_filename(&self, size: IconSize, scale: Scale) -> String {
        if scale.0 == 1 {
            format!("{0}_{1}x{1}.png", self.output_name, size.0)
        } else {
            format!("{0}_{1}x{1}@{2}x.png", self.output_name, size.0, scale.0)
        }
    }
}
