// View-count abbreviation shared by the card grid and the player panel.

const UNITS: [&str; 3] = ["K", "M", "B"];

/// Abbreviate a view count: `999` → `"999"`, `1500` → `"1.5K"`,
/// `2_000_000` → `"2.0M"`. Absent counts render as an empty string.
///
/// The unit is picked before rounding, so `999_999` becomes `"1000.0K"`.
/// Halves round up (`1250` → `"1.3K"`). Counts past a thousand billions
/// stay in `B`.
pub fn format_views(views: Option<u64>) -> String {
    let Some(n) = views else {
        return String::new();
    };
    if n < 1000 {
        return n.to_string();
    }

    let mut value = n as f64;
    let mut unit = 0;
    value /= 1000.0;
    while value >= 1000.0 && unit + 1 < UNITS.len() {
        value /= 1000.0;
        unit += 1;
    }
    // `{:.1}` alone rounds ties to even.
    let rounded = (value * 10.0).round() / 10.0;
    format!("{:.1}{}", rounded, UNITS[unit])
}

/// The `"{author} • {views} views"` line under a card or the player title.
pub fn byline(author: &str, views: Option<u64>) -> String {
    format!("{} • {} views", author, format_views(views))
}
