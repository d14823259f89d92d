/// Whether the navbar should switch to its compact, scrolled style.
pub fn navbar_is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Speed from a `data-parallax` attribute; empty or unparsable values use `default`.
pub fn parallax_speed(raw: Option<&str>, default: f64) -> f64 {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|speed| speed.is_finite())
        .unwrap_or(default)
}

/// CSS transform for a parallax layer.
pub fn parallax_transform(scroll_y: f64, speed: f64) -> String {
    let offset = -(scroll_y * speed);
    // Avoid "-0px" at the top of the page.
    let offset = if offset == 0.0 { 0.0 } else { offset };
    format!("translateY({offset}px)")
}

/// Element id targeted by an in-page link, or `None` for bare `#` and external links.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
