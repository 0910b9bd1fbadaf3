use std::env;
use std::io;
use std::path::{Component, Path, PathBuf};

pub(crate) const RC_FILE_ENV: &str = "BOM_ZSHRC";

pub(crate) fn env_optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Backing file resolution: CLI override, then BOM_ZSHRC, then ~/.zshrc.
pub(crate) fn rc_file_path(cli: Option<PathBuf>) -> PathBuf {
    if let Some(path) = cli {
        return path;
    }
    if let Some(value) = env_optional(RC_FILE_ENV) {
        return PathBuf::from(value);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".zshrc")
}

/// Resolve a directory argument to an absolute path. Symlinks are resolved
/// when the path exists; a nonexistent path is absolutized against the
/// current directory and cleaned lexically, since bookmarking a directory
/// that does not exist yet is allowed.
pub(crate) fn resolve_dir(path: &Path) -> io::Result<PathBuf> {
    if let Ok(resolved) = path.canonicalize() {
        return Ok(resolved);
    }
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };
    Ok(clean_components(&absolute))
}

fn clean_components(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Render a resolved directory as the stored target string (trailing slash).
pub(crate) fn target_string(path: &Path) -> String {
    let mut rendered = path.display().to_string();
    if !rendered.ends_with('/') {
        rendered.push('/');
    }
    rendered
}

/// Last path component of a target, used as the default bookmark name.
pub(crate) fn derive_name(target: &str) -> String {
    target
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or("")
        .to_string()
}
