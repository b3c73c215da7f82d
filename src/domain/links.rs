//! Reference rewriting for moved vault files.
//!
//! Handles the two link syntaxes notes use to embed attachments: wikilinks
//! (`![[path|alias]]`) and Markdown links (`![alt](path "title")`).

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::vault_path::{normalize_vault_path, parent_folder, relative_to, resolve_relative};

static WIKILINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(!?)\[\[([^\[\]|#^]+)([^\[\]]*)\]\]").expect("wikilink pattern is valid")
});

static MARKDOWN_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(!?\[[^\]]*\])\((<[^>]*>|[^)\s]+)([^)]*)\)").expect("markdown link pattern is valid")
});

/// How a reference spelled its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkStyle {
    /// Relative to the folder of the note holding the link.
    NoteRelative,
    /// Relative to the vault root without a leading separator.
    VaultRelative,
    /// Rooted at the vault with a leading `/`.
    VaultAbsolute,
}

/// Rewrite every reference in `content` that points at `old_path` so it
/// points at `new_path`.
///
/// Returns `None` when nothing in the note refers to `old_path`.
pub fn rewrite_references(
    note_path: &str,
    content: &str,
    old_path: &str,
    new_path: &str,
) -> Option<String> {
    let note_folder = parent_folder(note_path);
    let mut changed = false;

    let after_wikilinks = WIKILINK.replace_all(content, |caps: &Captures| {
        match rewrite_wikilink(note_folder, caps, old_path, new_path) {
            Some(rewritten) => {
                changed = true;
                rewritten
            }
            None => caps[0].to_string(),
        }
    });

    let after_markdown = MARKDOWN_LINK.replace_all(&after_wikilinks, |caps: &Captures| {
        match rewrite_markdown_link(note_folder, caps, old_path, new_path) {
            Some(rewritten) => {
                changed = true;
                rewritten
            }
            None => caps[0].to_string(),
        }
    });

    changed.then(|| after_markdown.into_owned())
}

fn rewrite_wikilink(
    note_folder: &str,
    caps: &Captures,
    old_path: &str,
    new_path: &str,
) -> Option<String> {
    let embed = &caps[1];
    let target = caps[2].trim();
    let suffix = &caps[3];

    let style = if target.starts_with("./") || target.starts_with("../") {
        (resolve_relative(note_folder, target)? == old_path).then_some(LinkStyle::NoteRelative)?
    } else {
        (normalize_vault_path(target) == old_path).then_some(LinkStyle::VaultRelative)?
    };

    let replacement = match style {
        LinkStyle::NoteRelative => dot_relative(note_folder, new_path),
        _ => new_path.to_string(),
    };

    Some(format!("{}[[{}{}]]", embed, replacement, suffix))
}

fn rewrite_markdown_link(
    note_folder: &str,
    caps: &Captures,
    old_path: &str,
    new_path: &str,
) -> Option<String> {
    let label = &caps[1];
    let raw_destination = &caps[2];
    let title = &caps[3];

    let angled = raw_destination.starts_with('<') && raw_destination.ends_with('>');
    let destination = if angled {
        &raw_destination[1..raw_destination.len() - 1]
    } else {
        raw_destination
    };

    if destination.contains("://") || destination.starts_with("mailto:") || destination.starts_with('#') {
        return None;
    }

    let (path_part, fragment) = match destination.find('#') {
        Some(idx) => destination.split_at(idx),
        None => (destination, ""),
    };

    let decoded = urlencoding::decode(path_part)
        .map(|value| value.into_owned())
        .unwrap_or_else(|_| path_part.to_string());

    let style = if decoded.starts_with('/') {
        (normalize_vault_path(&decoded) == old_path).then_some(LinkStyle::VaultAbsolute)?
    } else if resolve_relative(note_folder, &decoded).as_deref() == Some(old_path) {
        LinkStyle::NoteRelative
    } else if normalize_vault_path(&decoded) == old_path {
        LinkStyle::VaultRelative
    } else {
        return None;
    };

    let mut replacement = match style {
        LinkStyle::NoteRelative => relative_to(note_folder, new_path),
        LinkStyle::VaultRelative => new_path.to_string(),
        LinkStyle::VaultAbsolute => format!("/{}", new_path),
    };

    if !angled && (path_part.contains('%') || replacement.contains(' ')) {
        replacement = encode_segments(&replacement);
    }

    let destination = format!("{}{}", replacement, fragment);
    let destination = if angled { format!("<{}>", destination) } else { destination };

    Some(format!("{}({}{})", label, destination, title))
}

fn dot_relative(note_folder: &str, target: &str) -> String {
    let relative = relative_to(note_folder, target);
    if relative.starts_with("..") { relative } else { format!("./{}", relative) }
}

fn encode_segments(path: &str) -> String {
    path.split('/')
        .map(|segment| match segment {
            "" | "." | ".." => segment.to_string(),
            other => urlencoding::encode(other).into_owned(),
        })
        .collect::<Vec<_>>()
        .join("/")
}
