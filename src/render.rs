use std::path::{Path, PathBuf};
use resvg::{tiny_skia, usvg};
use thiserror::Error;

pub trait Renderer {
    fn render(&self, output: &Path, width: u32, height: u32) -> anyhow::Result<()>;
}

#[derive(Debug)]
pub struct SvgRenderer {
    tree: usvg::Tree,
}

impl SvgRenderer {
    pub fn open<T: AsRef<Path>>(svg_path: T) -> anyhow::Result<Self> {
        let svg_path = svg_path.as_ref();
        if !svg_path.is_file() {
            return Err(RenderError::SvgNotFound(svg_path.to_path_buf()))?;
        }

        let data = std::fs::read(svg_path)?;
        let options = usvg::Options::default();
        let tree = usvg::Tree::from_data(&data, &options)?;

        Ok(SvgRenderer { tree })
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, output: &Path, width: u32, height: u32) -> anyhow::Result<()> {
        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or(RenderError::PixmapAlloc { width, height })?;

        let size = self.tree.size();
        let transform = tiny_skia::Transform::from_scale(
            width as f32 / size.width(),
            height as f32 / size.height(),
        );
        resvg::render(&self.tree, transform, &mut pixmap.as_mut());

        pixmap.save_png(output)?;

        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("The SVG source was not found at {}!", .0.display())]
    SvgNotFound(PathBuf),
    #[error("Failed to allocate a {width}x{height} pixmap!")]
    PixmapAlloc { width: u32, height: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SVG: &str = concat!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"64\" height=\"64\">",
        "<rect width=\"64\" height=\"64\" fill=\"#3366cc\"/>",
        "</svg>",
    );

    #[test]
    fn open_fails_when_svg_missing() {
        let err = SvgRenderer::open("/definitely/not/here/icon.svg")
            .unwrap_err();

        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn renders_png_at_requested_size() {
        let svg_path = std::env::temp_dir().join("appicon-gen-render-test.svg");
        let png_path = std::env::temp_dir().join("appicon-gen-render-test.png");
        std::fs::write(&svg_path, TEST_SVG).unwrap();

        let renderer = SvgRenderer::open(&svg_path).unwrap();
        renderer.render(&png_path, 32, 32).unwrap();

        let pixmap = tiny_skia::Pixmap::load_png(&png_path).unwrap();
        assert_eq!(pixmap.width(), 32);
        assert_eq!(pixmap.height(), 32);

        std::fs::remove_file(svg_path).unwrap();
        std::fs::remove_file(png_path).unwrap();
    }
}
