//! Resolution of stored image paths into public URLs.
//!
//! Image files themselves live in an external static storage; the database
//! keeps only the relative path. A record without a stored path resolves to
//! an empty string instead of an error, so templates can render it as-is.

pub static DEFAULT_IMAGE_PATH: &'static str = "static/assets/img/logo.png";

pub fn default_image_path() -> Option<String> {
    Some(DEFAULT_IMAGE_PATH.to_string())
}

/// Joins the stored image path onto the static storage base URL.
pub fn resolve_image_url(base_url: &str, path: Option<&str>) -> String {
    match path {
        Some(p) if !p.is_empty() => format!("{}/{}", base_url.trim_end_matches('/'), p.trim_start_matches('/')),
        _ => String::new(),
    }
}
