use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Lists every `.json` file under `dir` that can serve as a destination state.
///
/// The source state is excluded even when it lives inside `dir`. Unreadable
/// entries are logged and skipped.
pub fn list_destination_states(source: &Path, dir: &Path) -> Vec<PathBuf> {
    let source_canonical = source.canonicalize().ok();
    let mut paths = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::error!(error = %err, dir = %dir.display(), "can't walk state directory");
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() || !path.extension().is_some_and(|ext| ext == "json") {
            continue;
        }
        if is_same_file(path, source, source_canonical.as_deref()) {
            continue;
        }

        tracing::debug!(path = %path.display(), "found destination state");
        paths.push(path.to_path_buf());
    }

    paths
}

fn is_same_file(path: &Path, source: &Path, source_canonical: Option<&Path>) -> bool {
    if path == source {
        return true;
    }
    match (source_canonical, path.canonicalize().ok()) {
        (Some(source), Some(path)) => source == path,
        _ => false,
    }
}
