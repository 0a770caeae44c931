/// Music profile link
///
/// Validates the configured artist link and derives the embeddable player
/// URL from it.

use url::Url;

use crate::error::{PortfolioError, Result};

/// Host every accepted link must point to
pub const PROFILE_HOST: &str = "open.spotify.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistEmbed {
    /// The link as configured
    pub link: String,
    pub artist_id: String,
    pub embed_url: String,
}

impl ArtistEmbed {
    pub fn parse(link: &str) -> Result<Self> {
        let invalid = |reason: &str| PortfolioError::InvalidProfileLink {
            link: link.to_string(),
            reason: reason.to_string(),
        };

        let url = Url::parse(link.trim()).map_err(|e| invalid(&e.to_string()))?;

        let host = url.host_str().unwrap_or("");
        if !host.contains(PROFILE_HOST) {
            return Err(invalid(&format!("expected host {}", PROFILE_HOST)));
        }

        let mut segments = url
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).collect::<Vec<_>>())
            .unwrap_or_default()
            .into_iter();

        if segments.next() != Some("artist") {
            return Err(invalid("path must start with /artist/"));
        }
        let artist_id = segments
            .next()
            .ok_or_else(|| invalid("missing artist id"))?
            .to_string();

        Ok(ArtistEmbed {
            link: link.to_string(),
            embed_url: format!("https://{}/embed/artist/{}", PROFILE_HOST, artist_id),
            artist_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_link() {
        let embed = ArtistEmbed::parse("https://open.spotify.com/artist/ABC123").unwrap();
        assert_eq!(embed.artist_id, "ABC123");
        assert_eq!(embed.embed_url, "https://open.spotify.com/embed/artist/ABC123");
    }

    #[test]
    fn test_query_and_trailing_slash_are_ignored() {
        let embed =
            ArtistEmbed::parse("https://open.spotify.com//artist/74vcDvkBngSQyEXeNRXYpB/?si=x")
                .unwrap();
        assert_eq!(embed.artist_id, "74vcDvkBngSQyEXeNRXYpB");
    }

    #[test]
    fn test_wrong_host_is_invalid() {
        let err = ArtistEmbed::parse("https://example.com/artist/ABC123").unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidProfileLink { .. }));
    }

    #[test]
    fn test_wrong_path_is_invalid() {
        assert!(ArtistEmbed::parse("https://open.spotify.com/album/ABC123").is_err());
        assert!(ArtistEmbed::parse("https://open.spotify.com/artist/").is_err());
        assert!(ArtistEmbed::parse("not a url").is_err());
        assert!(ArtistEmbed::parse("").is_err());
    }
}
