use std::fs::{read, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use serde_json::Value;
use thiserror::Error;

// The document is kept as raw JSON so that entries this tool does not
// touch survive the rewrite with their key order intact.
#[derive(Debug)]
pub struct IconManifest {
    doc: Value,
}

impl IconManifest {
    pub fn load_from<T: AsRef<Path>>(file_path: T) -> anyhow::Result<Self> {
        let file_path = file_path.as_ref();
        if !file_path.is_file() {
            return Err(ManifestError::ManifestNotFound(file_path.to_path_buf()))?;
        }

        let bytes = read(file_path)?;
        let doc = serde_json::from_slice(&bytes)?;

        Ok(IconManifest { doc })
    }

    pub fn save_to<T: AsRef<Path>>(&self, file_path: T) -> anyhow::Result<()> {
        let mut text = serde_json::to_string_pretty(&self.doc)?;
        text.push('\n');

        let mut file = File::create(file_path)?;
        file.write_all(text.as_bytes())?;

        Ok(())
    }

    pub fn image_count(&self) -> usize {
        self.doc.get("images")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    pub fn entries_mut(&mut self) -> impl Iterator<Item = ImageEntry<'_>> {
        self.images_mut()
            .iter_mut()
            .map(|value| ImageEntry { value })
    }

    fn images_mut(&mut self) -> &mut [Value] {
        match self.doc.get_mut("images").and_then(Value::as_array_mut) {
            Some(images) => images.as_mut_slice(),
            None => &mut [],
        }
    }

    #[cfg(test)]
    pub(crate) fn from_value(doc: Value) -> Self {
        IconManifest { doc }
    }

    #[cfg(test)]
    pub(crate) fn as_value(&self) -> &Value {
        &self.doc
    }
}

pub struct ImageEntry<'a> {
    value: &'a mut Value,
}

impl ImageEntry<'_> {
    pub fn idiom(&self) -> Option<&str> {
        self.value.get("idiom").and_then(Value::as_str)
    }

    pub fn size(&self) -> Option<&str> {
        self.value.get("size").and_then(Value::as_str)
    }

    pub fn scale(&self) -> Option<&str> {
        self.value.get("scale").and_then(Value::as_str)
    }

    pub fn set_filename(&mut self, filename: &str) {
        if let Value::Object(fields) = &mut *self.value {
            fields.insert(String::from("filename"), Value::String(String::from(filename)));
        }
    }
}

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("The manifest was not found at {}!", .0.display())]
    ManifestNotFound(PathBuf),
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use super::*;

    #[test]
    fn load_fails_when_manifest_missing() {
        let err = IconManifest::load_from("/definitely/not/here/Contents.json")
            .unwrap_err();

        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn saves_pretty_with_trailing_newline() {
        let manifest = IconManifest::from_value(json!({
            "images": [],
            "info": {
                "author": "xcode",
                "version": 1
            }
        }));

        let path = std::env::temp_dir().join("appicon-gen-save-test.json");
        manifest.save_to(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "{\n  \"images\": [],\n  \"info\": {\n    \"author\": \"xcode\",\n    \"version\": 1\n  }\n}\n",
        );

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn round_trips_unmodified_documents() {
        let text = concat!(
            "{\n",
            "  \"info\": {\n",
            "    \"author\": \"xcode\",\n",
            "    \"version\": 1\n",
            "  },\n",
            "  \"images\": [\n",
            "    {\n",
            "      \"idiom\": \"mac\",\n",
            "      \"size\": \"16x16\",\n",
            "      \"scale\": \"1x\"\n",
            "    }\n",
            "  ]\n",
            "}\n",
        );

        let src = std::env::temp_dir().join("appicon-gen-roundtrip-src.json");
        let dst = std::env::temp_dir().join("appicon-gen-roundtrip-dst.json");
        std::fs::write(&src, text).unwrap();

        let manifest = IconManifest::load_from(&src).unwrap();
        manifest.save_to(&dst).unwrap();

        assert_eq!(std::fs::read_to_string(&dst).unwrap(), text);

        std::fs::remove_file(src).unwrap();
        std::fs::remove_file(dst).unwrap();
    }

    #[test]
    fn set_filename_overwrites_in_place() {
        let mut manifest = IconManifest::from_value(json!({
            "images": [
                { "size": "16x16", "filename": "stale.png", "scale": "1x" }
            ]
        }));

        let mut entry = manifest.entries_mut().next().unwrap();
        entry.set_filename("fresh.png");

        assert_eq!(
            manifest.as_value(),
            &json!({
                "images": [
                    { "size": "16x16", "filename": "fresh.png", "scale": "1x" }
                ]
            }),
        );
    }

    #[test]
    fn missing_images_array_yields_no_entries() {
        let mut manifest = IconManifest::from_value(json!({ "info": {} }));

        assert_eq!(manifest.image_count(), 0);
        assert_eq!(manifest.entries_mut().count(), 0);
    }
}
