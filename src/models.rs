//! Data structures for the astronomy feed
//!
//! A feed is a JSON array of daily items. Each item is deserialized strictly:
//! a record with a missing field or a field of the wrong JSON type fails the
//! whole parse, so the renderer never sees a partially shaped item.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Media Type
// =============================================================================

/// Media discriminator for a feed item
///
/// The feed only publishes `"image"` and `"video"`. Anything else is kept
/// verbatim as `Other` and takes the image rendering branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MediaType {
    Image,
    Video,
    Other(String),
}

impl MediaType {
    pub fn is_video(&self) -> bool {
        matches!(self, MediaType::Video)
    }

    /// The feed's spelling of this media type
    pub fn as_str(&self) -> &str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Other(raw) => raw,
        }
    }
}

impl From<String> for MediaType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "image" => MediaType::Image,
            "video" => MediaType::Video,
            _ => MediaType::Other(raw),
        }
    }
}

impl From<MediaType> for String {
    fn from(media_type: MediaType) -> Self {
        match media_type {
            MediaType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaType::Image => write!(f, "Image"),
            MediaType::Video => write!(f, "Video"),
            MediaType::Other(raw) => write!(f, "{}", raw),
        }
    }
}

// =============================================================================
// Feed Item
// =============================================================================

/// One daily astronomy entry from the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    /// Image location, or the embed URL for videos
    pub url: String,
    pub title: String,
    /// Display string, never parsed
    pub date: String,
    /// Long-form text, only shown in the detail modal
    pub explanation: String,
    pub media_type: MediaType,
}

impl FeedItem {
    /// Whether activating this item's card opens the detail modal
    pub fn opens_modal(&self) -> bool {
        !self.media_type.is_video()
    }
}

impl fmt::Display for FeedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.date, self.media_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_json(media_type: &str) -> String {
        format!(
            r#"{{
                "url": "https://apod.nasa.gov/apod/image/2501/m31.jpg",
                "title": "Andromeda",
                "date": "2025-01-01",
                "explanation": "Our nearest large galactic neighbour.",
                "media_type": "{}"
            }}"#,
            media_type
        )
    }

    #[test]
    fn test_media_type_parsing() {
        let image: FeedItem = serde_json::from_str(&item_json("image")).unwrap();
        assert_eq!(image.media_type, MediaType::Image);

        let video: FeedItem = serde_json::from_str(&item_json("video")).unwrap();
        assert_eq!(video.media_type, MediaType::Video);

        let other: FeedItem = serde_json::from_str(&item_json("gif")).unwrap();
        assert_eq!(other.media_type, MediaType::Other("gif".to_string()));
    }

    #[test]
    fn test_unknown_media_type_kept_verbatim() {
        let item: FeedItem = serde_json::from_str(&item_json("interactive")).unwrap();
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["media_type"], "interactive");

        let known: FeedItem = serde_json::from_str(&item_json("video")).unwrap();
        assert_eq!(serde_json::to_value(&known).unwrap()["media_type"], "video");
    }

    #[test]
    fn test_only_video_skips_modal() {
        let mut item: FeedItem = serde_json::from_str(&item_json("image")).unwrap();
        assert!(item.opens_modal());

        item.media_type = MediaType::Video;
        assert!(!item.opens_modal());

        item.media_type = MediaType::Other("gif".to_string());
        assert!(item.opens_modal());
    }

    #[test]
    fn test_extra_fields_ignored() {
        let json = r#"{
            "url": "https://example.com/a.jpg",
            "hdurl": "https://example.com/a_hd.jpg",
            "copyright": "Someone",
            "service_version": "v1",
            "title": "A",
            "date": "2025-01-02",
            "explanation": "E",
            "media_type": "image"
        }"#;
        let item: FeedItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.title, "A");
    }

    #[test]
    fn test_missing_field_rejected() {
        let json = r#"{
            "url": "https://example.com/a.jpg",
            "date": "2025-01-02",
            "explanation": "E",
            "media_type": "image"
        }"#;
        assert!(serde_json::from_str::<FeedItem>(json).is_err());
    }

    #[test]
    fn test_wrong_type_rejected() {
        let json = r#"{
            "url": "https://example.com/a.jpg",
            "title": 42,
            "date": "2025-01-02",
            "explanation": "E",
            "media_type": "image"
        }"#;
        assert!(serde_json::from_str::<FeedItem>(json).is_err());
    }

    #[test]
    fn test_display() {
        let item: FeedItem = serde_json::from_str(&item_json("video")).unwrap();
        assert_eq!(item.to_string(), "Andromeda (2025-01-01) [Video]");
    }
}
