/// Scheme-and-path prefix every capture link starts with. The Cortex app
/// registers itself as the OS handler for this scheme.
pub const CAPTURE_URL_BASE: &str = "cortex://capture";

/// What kind of page a capture came from, guessed from the tab URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    Article,
    Video,
    SocialPost,
    Podcast,
    Reels,
}

/// Ordered (substrings, tag) rules. Order matters: a YouTube URL that also
/// mentions twitter.com must still classify as video.
const RULES: &[(&[&str], SourceType)] = &[
    (&["youtube.com", "vimeo.com"], SourceType::Video),
    (&["twitter.com", "x.com", "instagram.com"], SourceType::SocialPost),
    (&["spotify.com", "podcasts.apple.com"], SourceType::Podcast),
    (&["tiktok.com", "shorts"], SourceType::Reels),
];

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Video => "video",
            Self::SocialPost => "social_post",
            Self::Podcast => "podcast",
            Self::Reels => "reels",
        }
    }

    /// Guess the source type from a page URL. First matching rule wins;
    /// anything unrecognized is an article.
    pub fn detect(url: &str) -> Self {
        let url = url.to_lowercase();
        for (needles, source) in RULES {
            if needles.iter().any(|needle| url.contains(needle)) {
                return *source;
            }
        }
        Self::Article
    }
}

/// Active-tab metadata captured alongside a selection. Either field may be
/// unavailable (no browser frontmost, or a platform without a tab probe).
#[derive(Debug, Clone, Default)]
pub struct TabContext {
    pub url: Option<String>,
    pub title: Option<String>,
}

/// Build the deep link for a selection, or `None` when there is nothing to
/// capture (empty or whitespace-only selection).
///
/// Missing URL/title encode as empty-string values; the query keys are
/// always present, in the order `text`, `url`, `title`, `type`.
pub fn build_capture_url(selection: &str, tab: &TabContext) -> Option<String> {
    if selection.trim().is_empty() {
        return None;
    }

    let url = tab.url.as_deref().unwrap_or("");
    let title = tab.title.as_deref().unwrap_or("");
    let source = SourceType::detect(url);

    Some(format!(
        "{}?text={}&url={}&title={}&type={}",
        CAPTURE_URL_BASE,
        urlencoding::encode(selection),
        urlencoding::encode(url),
        urlencoding::encode(title),
        source.as_str(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_follows_precedence_order() {
        // Both a video and a social host appear; the earlier rule wins.
        assert_eq!(
            SourceType::detect("https://youtube.com/watch?ref=twitter.com"),
            SourceType::Video
        );
    }

    #[test]
    fn detect_is_case_insensitive() {
        assert_eq!(
            SourceType::detect("https://WWW.YouTube.COM/watch?v=1"),
            SourceType::Video
        );
    }

    #[test]
    fn detect_matches_path_substrings() {
        assert_eq!(
            SourceType::detect("https://example.com/shorts/1"),
            SourceType::Reels
        );
    }

    #[test]
    fn detect_defaults_to_article() {
        assert_eq!(
            SourceType::detect("https://example.com/blog/post"),
            SourceType::Article
        );
        assert_eq!(SourceType::detect(""), SourceType::Article);
    }

    #[test]
    fn detect_covers_every_rule_host() {
        assert_eq!(SourceType::detect("https://vimeo.com/123"), SourceType::Video);
        assert_eq!(SourceType::detect("https://x.com/abc"), SourceType::SocialPost);
        assert_eq!(
            SourceType::detect("https://instagram.com/p/1"),
            SourceType::SocialPost
        );
        assert_eq!(
            SourceType::detect("https://open.spotify.com/episode/2"),
            SourceType::Podcast
        );
        assert_eq!(
            SourceType::detect("https://podcasts.apple.com/us/podcast/3"),
            SourceType::Podcast
        );
        assert_eq!(
            SourceType::detect("https://www.tiktok.com/@a/video/9"),
            SourceType::Reels
        );
    }

    #[test]
    fn builds_full_link() {
        let tab = TabContext {
            url: Some("https://x.com/abc".into()),
            title: Some("Post".into()),
        };
        assert_eq!(
            build_capture_url("Hello World", &tab).as_deref(),
            Some(
                "cortex://capture?text=Hello%20World&url=https%3A%2F%2Fx.com%2Fabc&title=Post&type=social_post"
            )
        );
    }

    #[test]
    fn whitespace_selection_builds_nothing() {
        assert_eq!(build_capture_url("", &TabContext::default()), None);
        assert_eq!(build_capture_url("   ", &TabContext::default()), None);
        assert_eq!(build_capture_url("\n\t", &TabContext::default()), None);
    }

    #[test]
    fn missing_tab_fields_encode_as_empty_values() {
        let link = build_capture_url("note to self", &TabContext::default());
        assert_eq!(
            link.as_deref(),
            Some("cortex://capture?text=note%20to%20self&url=&title=&type=article")
        );
    }

    #[test]
    fn selection_is_encoded_untrimmed() {
        let link = build_capture_url(" a ", &TabContext::default()).unwrap();
        assert!(link.starts_with("cortex://capture?text=%20a%20&"));
    }
}
