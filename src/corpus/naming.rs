//! Names derived from paths: output locations and fallback titles.

use std::path::Path;

/// Prefix carried by legacy file names that is not part of the topic.
const LEGACY_PREFIX: &str = "doc-";

/// Folder used when a legacy name is nothing but the prefix.
const DEFAULT_FOLDER: &str = "Docs";

/// Folder and Markdown file name for a legacy file stem.
///
/// # Examples
///
/// ```
/// use notemark::corpus::output_names;
///
/// assert_eq!(output_names("doc-linux"), ("Linux".to_string(), "Linux.md".to_string()));
/// assert_eq!(output_names("doc-"), ("Docs".to_string(), "Docs.md".to_string()));
/// ```
pub fn output_names(stem: &str) -> (String, String) {
    let topic = stem.strip_prefix(LEGACY_PREFIX).unwrap_or(stem);

    let mut chars = topic.chars();
    let folder: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => DEFAULT_FOLDER.to_string(),
    };
    let file = format!("{folder}.md");
    (folder, file)
}

/// Fallback title for a Markdown document.
///
/// Documents live in a folder named after their topic, so the parent folder
/// name is preferred; the file stem is used otherwise. Dashes become spaces.
pub fn title_from_path(path: &Path) -> String {
    let name = path
        .parent()
        .and_then(Path::file_name)
        .or_else(|| path.file_stem())
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    name.replace('-', " ")
}
