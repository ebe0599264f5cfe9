//! Inline script metadata → `%pip install` cell
//!
//! Notebook setup cells declare their requirements with PEP 723 inline
//! metadata:
//!
//! ```text
//! # /// script
//! # dependencies = [
//! #     "numpy",
//! #     "scikit-image[data]",
//! # ]
//! # ///
//! ```
//!
//! Hosted kernels ignore that block, so the cell is replaced by one install
//! directive per dependency.

use super::unsupported::UNSUPPORTED_VIEWER;

pub const SCRIPT_MARKER: &str = "# /// script";
pub const DEPENDENCIES_START: &str = "# dependencies";
pub const DEPENDENCIES_END: &str = "# ]";
pub const INSTALL_HEADER: &str = "# Auto-generated Colab install cell";

/// Always installed, since it replaces the unsupported viewer
pub const BASELINE_DEPENDENCY: &str = "matplotlib";

/// Replace a script-metadata cell with install directives.
///
/// Returns `None` for sources without the script marker. The generated
/// source no longer contains the marker, so a second pass is a no-op.
pub fn rewrite_dependency_cell(source: &str) -> Option<String> {
    if !source.contains(SCRIPT_MARKER) {
        return None;
    }

    let commands = install_commands(&extract_dependencies(source));
    if commands.is_empty() {
        return None;
    }

    Some(format!("{}\n{}", INSTALL_HEADER, commands.join("\n")))
}

/// Quoted names between the dependency markers, in order.
///
/// A missing end marker is tolerated: collection runs to the end of the
/// source.
pub fn extract_dependencies(source: &str) -> Vec<String> {
    let mut inside = false;
    let mut deps = Vec::new();

    for line in source.lines().map(str::trim) {
        if !inside {
            inside = line.starts_with(DEPENDENCIES_START);
            continue;
        }

        if line.starts_with(DEPENDENCIES_END) {
            break;
        }

        if line.starts_with('#') {
            if let Some(dep) = line.split('"').nth(1) {
                deps.push(dep.to_string());
            }
        }
    }

    deps
}

/// Install directives for `deps`: any spec mentioning the viewer is
/// dropped, the baseline is appended when missing, and specs using extras
/// are quoted.
pub fn install_commands(deps: &[String]) -> Vec<String> {
    let mut deps: Vec<&str> = deps
        .iter()
        .map(String::as_str)
        .filter(|dep| !dep.contains(UNSUPPORTED_VIEWER))
        .collect();

    if !deps
        .iter()
        .any(|dep| package_name(dep) == BASELINE_DEPENDENCY)
    {
        deps.push(BASELINE_DEPENDENCY);
    }

    deps.into_iter()
        .map(|dep| {
            if dep.contains('[') || dep.contains(']') {
                format!("%pip install \"{}\"", dep)
            } else {
                format!("%pip install {}", dep)
            }
        })
        .collect()
}

/// Distribution name of a requirement spec, lowercased
/// (`"scikit-image[data]>=0.22"` → `scikit-image`).
fn package_name(spec: &str) -> String {
    spec.trim()
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect::<String>()
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SCRIPT_CELL: &str = r#"# /// script
# requires-python = ">=3.10"
# dependencies = [
#     "numpy",
#     "ndv[vispy]",
#     "scikit-image[data]",
# ]
# ///
import numpy as np"#;

    #[test]
    fn test_rewrites_script_cell() {
        let result = rewrite_dependency_cell(SCRIPT_CELL).unwrap();
        assert_eq!(
            result,
            "# Auto-generated Colab install cell\n\
             %pip install numpy\n\
             %pip install \"scikit-image[data]\"\n\
             %pip install matplotlib"
        );
    }

    #[test]
    fn test_ignores_quoted_lines_outside_block() {
        let deps = extract_dependencies(SCRIPT_CELL);
        assert_eq!(deps, vec!["numpy", "ndv[vispy]", "scikit-image[data]"]);
        assert!(!deps.iter().any(|d| d.contains(">=3.10")));
    }

    #[test]
    fn test_unterminated_block_collects_to_end() {
        let source = "# /// script\n# dependencies = [\n#   \"numpy\",\n#   \"tifffile\",";
        assert_eq!(extract_dependencies(source), vec!["numpy", "tifffile"]);
    }

    #[test]
    fn test_baseline_appears_once() {
        let deps = vec!["matplotlib".to_string(), "numpy".to_string()];
        let commands = install_commands(&deps);
        assert_eq!(
            commands,
            vec!["%pip install matplotlib", "%pip install numpy"]
        );

        let pinned = vec!["matplotlib>=3.8".to_string()];
        assert_eq!(install_commands(&pinned), vec!["%pip install matplotlib>=3.8"]);
    }

    #[test]
    fn test_viewer_never_installed() {
        let deps = vec!["ndv".to_string(), "ndv[pyqt]".to_string(), "numpy".to_string()];
        let commands = install_commands(&deps);
        assert!(commands.iter().all(|c| !c.contains("ndv")));
        assert_eq!(commands.len(), 2);
    }

    #[test]
    fn test_viewer_plugins_never_installed() {
        let deps = vec![
            "napari-ndv".to_string(),
            "ndv-plugins".to_string(),
            "numpy".to_string(),
        ];
        assert_eq!(
            install_commands(&deps),
            vec!["%pip install numpy", "%pip install matplotlib"]
        );
    }

    #[test]
    fn test_install_cell_has_nothing_left_to_comment() {
        let source = "# /// script\n# dependencies = [\n#   \"napari-ndv\",\n#   \"numpy\",\n# ]\n# ///";
        let rewritten = rewrite_dependency_cell(source).unwrap();
        assert_eq!(
            crate::domain::rewrite::comment_unsupported(&rewritten, UNSUPPORTED_VIEWER),
            None
        );
    }

    #[test]
    fn test_empty_block_still_installs_baseline() {
        let source = "# /// script\n# dependencies = [\n# ]\n# ///";
        assert_eq!(
            rewrite_dependency_cell(source).unwrap(),
            "# Auto-generated Colab install cell\n%pip install matplotlib"
        );
    }

    #[test]
    fn test_cells_without_marker_untouched() {
        assert_eq!(rewrite_dependency_cell("import numpy as np"), None);
        assert_eq!(
            rewrite_dependency_cell("# dependencies = [\n#  \"numpy\"\n# ]"),
            None
        );
    }

    #[test]
    fn test_second_pass_is_noop() {
        let once = rewrite_dependency_cell(SCRIPT_CELL).unwrap();
        assert_eq!(rewrite_dependency_cell(&once), None);
    }

    #[test]
    fn test_package_name() {
        assert_eq!(package_name("scikit-image[data]>=0.22"), "scikit-image");
        assert_eq!(package_name(" Matplotlib "), "matplotlib");
        assert_eq!(package_name("ndv[vispy]"), "ndv");
        assert_eq!(package_name("zarr<3"), "zarr");
    }
}
