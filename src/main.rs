use iced::widget::{center, column, container, mouse_area, opaque, row, scrollable, stack, text};
use iced::{window, Color, Element, Length, Subscription, Task, Theme};
use std::time::Instant;

mod config;
mod error;
mod state;
mod ui;

use config::Config;
use error::PortfolioError;
use state::catalog::Catalog;
use state::discovery::FsAssetSource;
use state::gallery::{Gallery, Overflow, PageScroll};
use state::profile::ArtistEmbed;
use state::tilt::ResetPolicy;
use ui::tilt_card::{CardId, Palette, PointerEvent, TiltCard};

/// Longest step fed to the tilt springs, keeps them stable after a stall
const MAX_FRAME_STEP: f32 = 1.0 / 30.0;

/// Main application state
struct Portfolio {
    /// Built once at startup, read-only afterwards
    catalog: Catalog,
    /// Overflow setting of the page, locked while the gallery is open
    page: PageScroll,
    gallery: Gallery,
    /// "Modern Development Setup" card, keeps its swing on leave
    setup_card: TiltCard,
    /// "Chrome Logo" card, fully resets on leave
    logo_card: TiltCard,
    profile: Result<ArtistEmbed, PortfolioError>,
    last_frame: Option<Instant>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked a card of the Designs grid
    SelectWork(u32),
    NextImage,
    PrevImage,
    CloseGallery,
    /// Pointer moved over or left a tilt card
    Pointer(CardId, PointerEvent),
    /// Animation frame while a tilt card is settling
    Frame(Instant),
    /// Open the artist profile in the system browser
    OpenProfile(String),
    /// Copy the artist link to the clipboard
    CopyProfileLink(String),
}

impl Portfolio {
    /// Create a new instance of the application from the startup catalog
    fn new(catalog: Catalog, config: &Config) -> (Self, Task<Message>) {
        let profile = ArtistEmbed::parse(&config.spotify_artist_url);
        match &profile {
            Ok(embed) => log::info!("Music profile: artist {}", embed.artist_id),
            Err(e) => log::warn!("{}", e),
        }

        let page = PageScroll::new(Overflow::Auto);

        (
            Portfolio {
                catalog,
                gallery: Gallery::new(page.clone()),
                page,
                setup_card: TiltCard::new(ResetPolicy::TiltOnly),
                logo_card: TiltCard::new(ResetPolicy::All),
                profile,
                last_frame: None,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectWork(id) => {
                if let Some(item) = self.catalog.item(id) {
                    log::debug!("Opening gallery for {}", item.title);
                    self.gallery.select(item);
                }
            }
            Message::NextImage => self.gallery.next(),
            Message::PrevImage => self.gallery.prev(),
            Message::CloseGallery => self.gallery.close(),
            Message::Pointer(card, event) => {
                self.card_mut(card).handle(event);
            }
            Message::Frame(now) => {
                let dt = self
                    .last_frame
                    .map(|last| now.duration_since(last).as_secs_f32())
                    .unwrap_or(1.0 / 60.0)
                    .min(MAX_FRAME_STEP);

                self.setup_card.advance(dt);
                self.logo_card.advance(dt);
                self.last_frame = if self.is_animating() { Some(now) } else { None };
            }
            Message::OpenProfile(link) => {
                ui::music::open_profile(&link, |link| open::that(link));
            }
            Message::CopyProfileLink(link) => {
                return iced::clipboard::write(link);
            }
        }

        Task::none()
    }

    fn card_mut(&mut self, card: CardId) -> &mut TiltCard {
        match card {
            CardId::Setup => &mut self.setup_card,
            CardId::Logo => &mut self.logo_card,
        }
    }

    fn is_animating(&self) -> bool {
        !self.setup_card.is_settled() || !self.logo_card.is_settled()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let designs = column![
            ui::section_header(
                "Designs",
                "Self-taught graphic designer working in Photoshop and Illustrator.",
            ),
            ui::gallery::grid(&self.catalog),
        ]
        .spacing(32);

        let showcase = column![
            ui::section_header(
                "Interactive Showcase",
                "Hover over the elements to see them come to life with 3D transformations.",
            ),
            row![
                column![
                    self.setup_card.view(CardId::Setup, Palette::SETUP),
                    text("Modern Development Setup").size(20),
                    text("Building with cutting-edge technology")
                        .size(14)
                        .color(Color::from_rgb(0.6, 0.6, 0.65)),
                ]
                .spacing(8)
                .align_x(iced::Alignment::Center)
                .width(Length::FillPortion(1)),
                column![
                    text("Chrome Logo").size(14).color(Color::from_rgb(0.6, 0.6, 0.65)),
                    self.logo_card.view(CardId::Logo, Palette::LOGO),
                ]
                .spacing(8)
                .width(Length::FillPortion(1)),
            ]
            .spacing(48),
        ]
        .spacing(32);

        let music = column![
            ui::section_header("Music", "Explore my artist profile and tracks on Spotify."),
            ui::music::view(&self.profile),
        ]
        .spacing(24);

        let page_body = column![designs, showcase, music].spacing(96).padding(48);

        let scrollbar = match self.page.overflow() {
            Overflow::Auto => scrollable::Scrollbar::new(),
            Overflow::Hidden => scrollable::Scrollbar::new().width(0).scroller_width(0),
        };
        let page = scrollable(page_body)
            .direction(scrollable::Direction::Vertical(scrollbar))
            .width(Length::Fill)
            .height(Length::Fill);

        match (self.gallery.selected(), self.gallery.index()) {
            (Some(id), Some(index)) => match self.catalog.item(id) {
                Some(item) => stack![
                    page,
                    opaque(
                        mouse_area(center(opaque(ui::gallery::detail(item, index))).style(
                            |_theme| container::Style {
                                background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.9).into()),
                                ..container::Style::default()
                            }
                        ))
                        .on_press(Message::CloseGallery)
                    ),
                ]
                .into(),
                None => page.into(),
            },
            _ => page.into(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.is_animating() {
            window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load();
    log::info!("Loading assets from {}", config.assets_root.display());

    let source = FsAssetSource::new(&config.assets_root);
    let catalog = Catalog::build(&source, &config.brand_dirs, &config.freelance_dirs);

    iced::application("WOL Portfolio", Portfolio::update, Portfolio::view)
        .subscription(Portfolio::subscription)
        .theme(Portfolio::theme)
        .centered()
        .run_with(move || Portfolio::new(catalog, &config))
}
