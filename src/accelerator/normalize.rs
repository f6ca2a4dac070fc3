//! Canonical lowercase form of event key labels

/// Normalize a raw key label for comparison against parsed accelerator keys
///
/// Lowercases the label and rewrites the space character and the arrow key
/// labels; everything else passes through lowercased.
pub fn normalize_key(raw: &str) -> String {
    let lower = raw.to_lowercase();
    match lower.as_str() {
        " " => "space".to_string(),
        "arrowup" => "up".to_string(),
        "arrowdown" => "down".to_string(),
        "arrowleft" => "left".to_string(),
        "arrowright" => "right".to_string(),
        _ => lower,
    }
}
