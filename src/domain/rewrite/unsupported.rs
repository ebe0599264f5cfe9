//! Commenting out calls to APIs the cloud kernel cannot run

/// Interactive viewer that needs a local GUI
pub const UNSUPPORTED_VIEWER: &str = "ndv";

/// Comment out every line mentioning `name`, appending a caveat.
///
/// The match is plain substring containment, so occurrences inside strings
/// or comments are commented out as well.
pub fn comment_unsupported(source: &str, name: &str) -> Option<String> {
    if !source.contains(name) {
        return None;
    }

    let lines: Vec<String> = source
        .lines()
        .map(|line| {
            if line.contains(name) {
                format!(
                    "# {}  # ❌ {} is not yet supported on Colab. Use matplotlib instead.",
                    line, name
                )
            } else {
                line.to_string()
            }
        })
        .collect();

    Some(lines.join("\n"))
}
