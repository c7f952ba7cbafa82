use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path: drop `.` components and fold `..` into the
/// preceding component where one exists.
///
/// No filesystem access happens here, so symlinks are not resolved. Leading
/// `..` components of a relative path are preserved.
///
/// # Examples
///
/// - `"./src/lib.rs"` becomes `"src/lib.rs"`
/// - `"src/../lib.rs"` becomes `"lib.rs"`
/// - `"../lib.rs"` stays `"../lib.rs"`
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Express `path` relative to `base`, the way `path.relative(cwd, p)` would.
///
/// Relative inputs are first anchored at `base`. The result is empty when
/// `path` is `base` itself, and starts with `..` when it lies outside.
#[must_use]
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let absolute = normalize(&base.join(path));
    let base = normalize(base);
    pathdiff::diff_paths(&absolute, &base).unwrap_or(absolute)
}
