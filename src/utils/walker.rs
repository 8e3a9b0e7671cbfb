use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use glob::{MatchOptions, Pattern};
use log::{debug, info, trace};
use path_clean::PathClean;

/// Counts the entries below a root whose relative path matches a glob pattern.
///
/// Patterns without `**` only ever match at a fixed depth (one level per path
/// component), so the walk stops descending there. Patterns with `**` walk the
/// whole tree and do not follow directory symlinks.
#[derive(Debug, Clone)]
pub struct Walker {
    pattern: Pattern,
    depth: Option<usize>,
    options: MatchOptions,
}

impl Walker {
    pub fn new(pattern: &str) -> anyhow::Result<Self> {
        // Same lexical cleanup as the joined pattern handed to `glob`, so `./a/*` matches `a/x`.
        let cleaned = Path::new(pattern).clean();
        let pattern = cleaned.to_string_lossy();
        let depth = if pattern.contains("**") {
            None
        } else {
            Some(
                cleaned
                    .components()
                    .filter(|component| matches!(component, Component::Normal(_)))
                    .count(),
            )
        };
        Ok(Walker {
            pattern: Pattern::new(&pattern)?,
            depth,
            options: MatchOptions {
                require_literal_separator: true,
                ..MatchOptions::new()
            },
        })
    }

    pub fn depth(&self) -> Option<usize> {
        self.depth
    }

    fn walk_dir(&self, dir: &Path, relative: &Path, level: usize) -> usize {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Failed to read directory '{}': {}", dir.display(), e);
                return 0;
            }
        };
        let mut entries: Vec<_> = entries.filter_map(|entry| entry.ok()).collect();
        entries.sort_by_key(|entry| entry.file_name());

        let at_bottom = self.depth.map_or(false, |depth| level >= depth);
        let mut matches = 0;
        for entry in entries {
            let path = entry.path();
            let relative = relative.join(entry.file_name());
            if (at_bottom || self.depth.is_none())
                && self.pattern.matches_path_with(&relative, self.options)
            {
                trace!("Matched '{}'", path.display());
                matches += 1;
            }
            if at_bottom {
                continue;
            }
            let dive = match self.depth {
                Some(_) => path.is_dir(),
                None => match entry.file_type() {
                    Ok(file_type) if file_type.is_symlink() => {
                        info!("Skipping symlink '{}'", path.display());
                        false
                    }
                    Ok(file_type) => file_type.is_dir(),
                    Err(e) => {
                        debug!("Failed to get path '{}' type: {}", path.display(), e);
                        false
                    }
                },
            };
            if dive {
                matches += self.walk_dir(&path, &relative, level + 1);
            }
        }
        matches
    }

    pub fn walk(&self, root: &Path) -> usize {
        self.walk_dir(root, &PathBuf::new(), 1)
    }
}
