use std::fs::create_dir_all;
use std::path::Path;

pub fn ensure_dir<T: AsRef<Path>>(dir: T) -> anyhow::Result<()> {
    let dir = dir.as_ref();

    if !dir.is_dir() {
        create_dir_all(dir)?;
    }

    Ok(())
}
