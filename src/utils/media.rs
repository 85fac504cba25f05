/// Public URL for a stored media path.
///
/// Entities store paths relative to the media root (`actors/keanu.jpg`);
/// the router serves the media directory under `/media`.
pub fn media_url(path: &str) -> String {
    format!("/media/{}", path.trim_start_matches('/'))
}
