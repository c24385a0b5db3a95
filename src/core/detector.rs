//! Framework detection from marker files in the project root.

use super::types::FrameworkKind;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const NEXT_CONFIG_FILES: &[&str] = &["next.config.js", "next.config.mjs", "next.config.ts"];
const VITE_CONFIG_FILES: &[&str] = &["vite.config.js", "vite.config.ts"];
const PACKAGE_MANIFEST: &str = "package.json";
const CRA_MARKER_PACKAGE: &str = "react-scripts";

#[derive(serde::Deserialize)]
struct PackageManifest {
    #[serde(default)]
    dependencies: HashMap<String, serde_json::Value>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: HashMap<String, serde_json::Value>,
}

/// Classify the project at `root`. First matching rule wins:
/// Next.js config, Vite config, `react-scripts` in package.json.
pub fn detect(root: &Path) -> FrameworkKind {
    if NEXT_CONFIG_FILES.iter().any(|f| root.join(f).is_file()) {
        return FrameworkKind::NextJS;
    }

    if VITE_CONFIG_FILES.iter().any(|f| root.join(f).is_file()) {
        return FrameworkKind::Vite;
    }

    if manifest_has_cra_marker(&root.join(PACKAGE_MANIFEST)) {
        return FrameworkKind::CreateReactApp;
    }

    FrameworkKind::Unknown
}

fn manifest_has_cra_marker(path: &Path) -> bool {
    let Ok(content) = fs::read_to_string(path) else {
        return false;
    };

    match serde_json::from_str::<PackageManifest>(&content) {
        Ok(manifest) => {
            manifest.dependencies.contains_key(CRA_MARKER_PACKAGE)
                || manifest.dev_dependencies.contains_key(CRA_MARKER_PACKAGE)
        }
        Err(e) => {
            tracing::warn!("Ignoring unreadable {}: {}", path.display(), e);
            false
        }
    }
}
