/// Extensions of files treated as managed attachments.
pub const MANAGED_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "bmp", "svg", "webp"];

/// Whether a file with this extension (no leading dot) is a managed attachment.
pub fn is_managed_attachment(extension: &str) -> bool {
    MANAGED_EXTENSIONS.iter().any(|managed| managed.eq_ignore_ascii_case(extension))
}
