//! Vault path helpers.
//!
//! A vault path is the `/`-separated location of an entry relative to the
//! vault root, with no leading or trailing separator. The vault root itself
//! is spelled `/`.

/// Root of the vault in normalized form.
pub const VAULT_ROOT: &str = "/";

/// Normalize a user- or OS-supplied path into vault path form.
pub fn normalize_vault_path(path: &str) -> String {
    let mut normalized = String::with_capacity(path.len());
    let mut previous_was_separator = false;
    for ch in path.chars() {
        let ch = match ch {
            '\\' => '/',
            '\u{00A0}' | '\u{202F}' => ' ',
            other => other,
        };
        if ch == '/' {
            if previous_was_separator {
                continue;
            }
            previous_was_separator = true;
        } else {
            previous_was_separator = false;
        }
        normalized.push(ch);
    }

    let trimmed = normalized.trim_matches('/');
    if trimmed.is_empty() { VAULT_ROOT.to_string() } else { trimmed.to_string() }
}

/// Whether `path` lives strictly below `folder`.
///
/// `folder` is compared with a trailing separator appended, so `public2/a.md`
/// is not inside `public`.
pub fn is_within(path: &str, folder: &str) -> bool {
    path.starts_with(&format!("{}/", folder))
}

/// Folder containing `path`, or the empty string for entries at the vault root.
pub fn parent_folder(path: &str) -> &str {
    path.rfind('/').map(|idx| &path[..idx]).unwrap_or("")
}

/// Final segment of `path`.
pub fn file_name(path: &str) -> &str {
    path.rfind('/').map(|idx| &path[idx + 1..]).unwrap_or(path)
}

/// Resolve a relative reference (`./a.png`, `../img/a.png`, `img/a.png`)
/// against `base_folder`.
///
/// Returns `None` when the reference climbs above the vault root.
pub fn resolve_relative(base_folder: &str, reference: &str) -> Option<String> {
    let mut segments: Vec<&str> =
        base_folder.split('/').filter(|segment| !segment.is_empty()).collect();

    for segment in reference.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            other => segments.push(other),
        }
    }

    if segments.is_empty() { None } else { Some(segments.join("/")) }
}

/// Express `target` relative to `base_folder` using `..` segments where needed.
pub fn relative_to(base_folder: &str, target: &str) -> String {
    let base: Vec<&str> = base_folder.split('/').filter(|segment| !segment.is_empty()).collect();
    let target_segments: Vec<&str> = target.split('/').collect();

    let common = base.iter().zip(&target_segments).take_while(|(a, b)| a == b).count();

    let mut parts: Vec<&str> = std::iter::repeat_n("..", base.len() - common).collect();
    parts.extend_from_slice(&target_segments[common..]);
    parts.join("/")
}
