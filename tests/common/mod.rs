use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn bookprep_cmd() -> Command {
    let mut cmd = Command::cargo_bin("bookprep").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write a notebook with the given cells (JSON values) to `path`
#[allow(dead_code)]
pub fn write_notebook(path: &Path, cells: serde_json::Value) {
    let notebook = serde_json::json!({
        "cells": cells,
        "metadata": {
            "kernelspec": {"display_name": "Python 3", "language": "python", "name": "python3"}
        },
        "nbformat": 4,
        "nbformat_minor": 5
    });
    fs::write(path, serde_json::to_string_pretty(&notebook).unwrap()).unwrap();
}

/// Read a written notebook back as JSON
#[allow(dead_code)]
pub fn read_notebook(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

/// Joined source of every cell, in order
#[allow(dead_code)]
pub fn cell_sources(notebook: &serde_json::Value) -> Vec<String> {
    notebook["cells"]
        .as_array()
        .unwrap()
        .iter()
        .map(|cell| match &cell["source"] {
            serde_json::Value::Array(lines) => lines
                .iter()
                .map(|l| l.as_str().unwrap())
                .collect::<String>(),
            other => other.as_str().unwrap().to_string(),
        })
        .collect()
}
