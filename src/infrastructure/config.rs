//! Configuration management
//!
//! The built-in tables describe the book this tool was written for. A TOML
//! file may override any of them; missing keys keep their defaults.

use crate::domain::rewrite::LinkMap;
use crate::domain::StyleTable;
use crate::error::{BookprepError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// HTML pages whose headings keep the theme's own look
const EXCLUDE_FROM_STYLING: &[&str] = &[
    "bioimage_analysis_intro.html",
    "python_basics.html",
    "digital_images_intro.html",
    "object_classification.html",
    "measurement_and_quantification_intro.html",
    "reproducibility_and_image_ethics.html",
    "python_for_digital_images.html",
    "segmentation_intro.html",
    "intro_to_ilastik.html",
];

/// Notebooks that are published as-is
const EXCLUDE_FROM_NOTEBOOKS: &[&str] = &["cellpose_notebook_colab.ipynb"];

const LINK_REMAP_DOCUMENT: &str = "python_basics_notebook.ipynb";

/// Book anchors → anchors Jupyter generates for the same headings
const LINK_REMAP: &[(&str, &str)] = &[
    ("#commenting-printing", "#0.-Commenting-&-Printing"),
    ("#data-types", "#1.-Data-Types"),
    ("#variables", "#2.-Variables"),
    ("#operators", "#3.-Operators"),
    ("#data-structures", "#4.-Data-Structures"),
    ("#data-structures-lists", "#5.-Data-Structures:-Lists"),
    ("#data-structures-tuples", "#6.-Data-Structures:-Tuples"),
    ("#data-structures-dictionaries", "#7.-Data-Structures:-Dictionaries"),
    ("#data-structures-sets", "#8.-Data-Structures:-Sets"),
    ("#for-loops", "#9.-For-Loops"),
    ("#if-statements", "#10.-If-Statements"),
    ("#functions", "#11.-Functions"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinkRemapConfig {
    /// File name of the only notebook the table applies to
    pub document: String,
    pub links: BTreeMap<String, String>,
}

impl Default for LinkRemapConfig {
    fn default() -> Self {
        LinkRemapConfig {
            document: LINK_REMAP_DOCUMENT.to_string(),
            links: LINK_REMAP
                .iter()
                .map(|(old, new)| (old.to_string(), new.to_string()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub styles: StyleTable,
    pub exclude_from_styling: Vec<String>,
    pub exclude_from_notebooks: Vec<String>,
    pub link_remap: LinkRemapConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            styles: StyleTable::default(),
            exclude_from_styling: EXCLUDE_FROM_STYLING.iter().map(|s| s.to_string()).collect(),
            exclude_from_notebooks: EXCLUDE_FROM_NOTEBOOKS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            link_remap: LinkRemapConfig::default(),
        }
    }
}

impl Config {
    /// Load overrides from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BookprepError::InputNotFound(path.to_path_buf())
            } else {
                BookprepError::Io(e)
            }
        })?;

        Self::from_toml_str(&contents).map_err(|e| {
            BookprepError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Whether an HTML page (by file name) is left unstyled
    pub fn is_excluded_from_styling(&self, file_name: &str) -> bool {
        self.exclude_from_styling.iter().any(|name| name == file_name)
    }

    /// Whether a notebook (by file name) is skipped by `update-notebooks`
    pub fn is_excluded_from_notebooks(&self, file_name: &str) -> bool {
        self.exclude_from_notebooks
            .iter()
            .any(|name| name == file_name)
    }

    /// The anchor table, if it applies to the document named `file_name`
    pub fn link_map_for(&self, file_name: &str) -> Option<LinkMap> {
        (self.link_remap.document == file_name).then(|| LinkMap::new(self.link_remap.links.clone()))
    }
}
