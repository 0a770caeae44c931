use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Color, Element, Length};

use crate::config::SPOTIFY_URL_VAR;
use crate::error::PortfolioError;
use crate::state::profile::ArtistEmbed;
use crate::Message;

/// Music section: the player link, or why there isn't one
pub fn view(profile: &Result<ArtistEmbed, PortfolioError>) -> Element<'_, Message> {
    let body = match profile {
        Ok(embed) => column![
            text("Artist player").size(20),
            text(&embed.embed_url).size(14).color(Color::from_rgb(0.6, 0.8, 0.6)),
            row![
                button(text("Open on Spotify"))
                    .on_press(Message::OpenProfile(embed.link.clone()))
                    .padding([8, 16]),
                button(text("Copy link"))
                    .on_press(Message::CopyProfileLink(embed.link.clone()))
                    .padding([8, 16]),
            ]
            .spacing(12),
        ],
        Err(e) => column![
            text("Invalid Spotify artist URL.").size(16),
            text(format!("Set a valid link via {} in your env.", SPOTIFY_URL_VAR))
                .size(13)
                .color(Color::from_rgb(0.6, 0.6, 0.65)),
            text(e.to_string()).size(12).color(Color::from_rgb(0.5, 0.5, 0.55)),
        ],
    };

    container(body.spacing(12).align_x(Alignment::Center))
        .width(Length::Fill)
        .padding(24)
        .center_x(Length::Fill)
        .into()
}

/// Hand the artist link to `opener` (the system browser in the app).
/// Returns false and logs a warning if it could not be opened.
pub fn open_profile<F>(link: &str, opener: F) -> bool
where
    F: FnOnce(&str) -> std::io::Result<()>,
{
    match opener(link) {
        Ok(()) => {
            log::info!("Opened {}", link);
            true
        }
        Err(e) => {
            log::warn!("Failed to open {}: {}", link, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    const LINK: &str = "https://open.spotify.com/artist/0abc123";

    #[test]
    fn test_open_profile_passes_artist_link() {
        let opened = RefCell::new(Vec::new());
        let ok = open_profile(LINK, |link| {
            opened.borrow_mut().push(link.to_string());
            Ok(())
        });

        assert!(ok);
        assert_eq!(opened.into_inner(), vec![LINK.to_string()]);
    }

    #[test]
    fn test_open_profile_failure_is_reported() {
        let ok = open_profile(LINK, |_| {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no browser"))
        });
        assert!(!ok);
    }

    #[test]
    fn test_open_action_uses_configured_link() {
        let embed = ArtistEmbed::parse(LINK).unwrap();
        let mut opened = None;
        open_profile(&embed.link, |link| {
            opened = Some(link.to_string());
            Ok(())
        });
        assert_eq!(opened.as_deref(), Some(LINK));
    }
}
