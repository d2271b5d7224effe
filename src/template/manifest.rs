use serde_json::Value;
use std::path::Path;

use crate::constants::MANIFEST_FILE;
use crate::error::{Error, Result};
use crate::ioutils::write_file;

/// Sets `name` and `description` on a parsed manifest, leaving every other
/// field and the key order untouched.
pub fn patch_manifest_value(manifest: &mut Value, name: &str, description: &str) -> Result<()> {
    let object = manifest.as_object_mut().ok_or_else(|| Error::ManifestError {
        manifest: MANIFEST_FILE.to_string(),
    })?;
    object.insert("name".to_string(), Value::String(name.to_string()));
    object.insert("description".to_string(), Value::String(description.to_string()));
    Ok(())
}

/// Serializes a manifest with two-space indentation and a trailing newline.
pub fn render_manifest(manifest: &Value) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(manifest)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Reads the template's manifest, patches it, and writes it into `output_root`.
///
/// Returns the patched manifest.
pub fn write_manifest(
    template_root: &Path,
    output_root: &Path,
    name: &str,
    description: &str,
) -> Result<Value> {
    let source = template_root.join(MANIFEST_FILE);
    let content = std::fs::read_to_string(&source)?;
    let mut manifest: Value = serde_json::from_str(&content)?;
    patch_manifest_value(&mut manifest, name, description).map_err(|_| Error::ManifestError {
        manifest: source.display().to_string(),
    })?;

    let target = output_root.join(MANIFEST_FILE);
    write_file(&render_manifest(&manifest)?, &target)?;
    log::info!("Writing to '{}'", target.display());
    Ok(manifest)
}

/// The `name` field of a manifest, if present.
pub fn manifest_name(manifest: &Value) -> Option<&str> {
    manifest.get("name").and_then(Value::as_str)
}
