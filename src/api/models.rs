// src/api/models.rs

use serde::{Deserialize, Deserializer};
use url::Url;

/// One video as returned by the backend's trending and search endpoints.
///
/// Only `id` is required. Everything else falls back to an empty value so a
/// sparse item still renders as a card.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Video {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub views: Option<u64>,
}

impl Video {
    /// First character of the author name, or `?` when there is none.
    pub fn avatar_initial(&self) -> String {
        self.author
            .chars()
            .next()
            .map_or_else(|| "?".to_string(), |c| c.to_string())
    }

    /// Host part of the thumbnail URL, shown in place of the image.
    /// Scheme-relative URLs (`//cdn.example.com/a.jpg`) are read as https.
    pub fn thumbnail_host(&self) -> Option<String> {
        let raw = self.thumbnail.as_deref()?.trim();
        let parsed = match Url::parse(raw) {
            Ok(parsed) => parsed,
            Err(url::ParseError::RelativeUrlWithoutBase) if raw.starts_with("//") => {
                Url::parse(&format!("https:{}", raw)).ok()?
            }
            Err(_) => return None,
        };
        parsed.host_str().map(str::to_string)
    }
}

// ── List endpoints (trending, search) ──

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<Video>,
}

/// Accept any non-negative JSON number for a view count. Fractions are
/// floored (`1500.7` → `1500`); negative or non-numeric values are unknown.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| {
        v.as_u64().or_else(|| {
            v.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.floor() as u64)
        })
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_initial_falls_back_to_question_mark() {
        let v: Video = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert_eq!(v.avatar_initial(), "?");
    }

    fn with_thumbnail(url: &str) -> Video {
        Video {
            id: "a".into(),
            title: String::new(),
            author: String::new(),
            thumbnail: Some(url.into()),
            views: None,
        }
    }

    #[test]
    fn thumbnail_host_strips_scheme_and_path() {
        let v = with_thumbnail("https://i.ytimg.com/vi/a/hq.jpg");
        assert_eq!(v.thumbnail_host().as_deref(), Some("i.ytimg.com"));
    }

    #[test]
    fn thumbnail_host_handles_scheme_relative_urls() {
        let v = with_thumbnail("//cdn.example.com/a.jpg");
        assert_eq!(v.thumbnail_host().as_deref(), Some("cdn.example.com"));
    }

    #[test]
    fn thumbnail_host_drops_userinfo_and_port() {
        let v = with_thumbnail("https://u@cdn.example.com:8443/x");
        assert_eq!(v.thumbnail_host().as_deref(), Some("cdn.example.com"));
    }

    #[test]
    fn thumbnail_host_is_none_for_unparseable_values() {
        assert_eq!(with_thumbnail("").thumbnail_host(), None);
        assert_eq!(with_thumbnail("not a url").thumbnail_host(), None);
    }

    #[test]
    fn float_view_counts_are_floored() {
        let v: Video = serde_json::from_str(r#"{"id":"x","views":1500.7}"#).unwrap();
        assert_eq!(v.views, Some(1500));
        let v: Video = serde_json::from_str(r#"{"id":"x","views":-1.0}"#).unwrap();
        assert_eq!(v.views, None);
    }
}
