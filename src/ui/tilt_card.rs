use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, Path, Program, Stroke};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Theme};

use crate::state::data::TiltState;
use crate::state::tilt::{Bounds, ResetPolicy, TiltCalculator};
use crate::Message;

/// Which tilt card an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardId {
    Setup,
    Logo,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Cursor at viewport position (`x`, `y`) over a card with `bounds`
    Moved { x: f32, y: f32, bounds: Bounds },
    Left,
}

/// Spring response of the card
const STIFFNESS: f32 = 300.0;
const DAMPING: f32 = 30.0;
const MASS: f32 = 1.0;

/// Distance from the camera used for the perspective projection
const PERSPECTIVE: f32 = 1000.0;

/// Gap between the canvas edge and the card face
const MARGIN: f32 = 28.0;

/// One damped spring per animated angle
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spring {
    pub value: f32,
    pub velocity: f32,
}

impl Spring {
    pub fn step(&mut self, target: f32, dt: f32) {
        let force = -STIFFNESS * (self.value - target) - DAMPING * self.velocity;
        self.velocity += force / MASS * dt;
        self.value += self.velocity * dt;
    }

    pub fn is_settled(&self, target: f32) -> bool {
        (self.value - target).abs() < 0.01 && self.velocity.abs() < 0.01
    }
}

/// A tilt demo: raw angles from the calculator, smoothed for display
#[derive(Debug, Clone)]
pub struct TiltCard {
    calc: TiltCalculator,
    target: TiltState,
    x: Spring,
    y: Spring,
    swing: Spring,
}

impl TiltCard {
    pub fn new(reset: ResetPolicy) -> Self {
        Self {
            calc: TiltCalculator::new(reset),
            target: TiltState::NEUTRAL,
            x: Spring::default(),
            y: Spring::default(),
            swing: Spring::default(),
        }
    }

    pub fn handle(&mut self, event: PointerEvent) {
        self.target = match event {
            PointerEvent::Moved { x, y, bounds } => self.calc.compute(x, y, bounds),
            PointerEvent::Left => self.calc.on_leave(&self.target),
        };
    }

    /// Advance the springs by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.x.step(self.target.rotate_x, dt);
        self.y.step(self.target.rotate_y, dt);
        self.swing.step(self.target.swing, dt);
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled(self.target.rotate_x)
            && self.y.is_settled(self.target.rotate_y)
            && self.swing.is_settled(self.target.swing)
    }

    /// Raw angles last produced by the calculator
    #[cfg(test)]
    pub fn target(&self) -> TiltState {
        self.target
    }

    /// Angles currently on screen
    pub fn shown(&self) -> TiltState {
        TiltState {
            rotate_x: self.x.value,
            rotate_y: self.y.value,
            swing: self.swing.value,
        }
    }

    pub fn view(&self, id: CardId, palette: Palette) -> Element<'_, Message> {
        canvas::Canvas::new(TiltFace {
            id,
            angles: self.shown(),
            palette,
        })
        .width(Length::Fill)
        .height(Length::Fixed(340.0))
        .into()
    }
}

const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
    Color { r, g, b, a }
}

/// Fill colors of a card
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub face: Color,
    pub border: Color,
    pub emblem: Color,
    pub orb_a: Color,
    pub orb_b: Color,
}

impl Palette {
    pub const SETUP: Palette = Palette {
        face: rgba(0.55, 0.36, 0.96, 0.18),
        border: rgba(1.0, 1.0, 1.0, 0.2),
        emblem: rgba(0.85, 0.85, 0.9, 0.9),
        orb_a: rgba(0.66, 0.33, 0.97, 0.35),
        orb_b: rgba(0.23, 0.51, 0.96, 0.35),
    };

    pub const LOGO: Palette = Palette {
        face: rgba(0.13, 0.77, 0.37, 0.12),
        border: rgba(1.0, 1.0, 1.0, 0.2),
        emblem: rgba(0.9, 0.9, 0.95, 0.9),
        orb_a: rgba(0.93, 0.28, 0.6, 0.35),
        orb_b: rgba(0.02, 0.71, 0.83, 0.35),
    };
}

/// Project a point of the card (origin at its center, y down, z toward the
/// viewer) after rotating it by `tilt`
pub fn project(x: f32, y: f32, z: f32, tilt: &TiltState, center: Point) -> Point {
    // Rotations apply Z first, then Y, then X
    let (sz, cz) = tilt.swing.to_radians().sin_cos();
    let (x, y) = (x * cz - y * sz, x * sz + y * cz);

    let (sy, cy) = tilt.rotate_y.to_radians().sin_cos();
    let (x, z) = (x * cy + z * sy, -x * sy + z * cy);

    let (sx, cx) = tilt.rotate_x.to_radians().sin_cos();
    let (y, z) = (y * cx - z * sx, y * sx + z * cx);

    let scale = PERSPECTIVE / (PERSPECTIVE - z).max(1.0);
    Point::new(center.x + x * scale, center.y + y * scale)
}

fn polygon(points: &[Point]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    Some(Path::new(|builder| {
        builder.move_to(*first);
        for point in rest {
            builder.line_to(*point);
        }
        builder.close();
    }))
}

fn disc(cx: f32, cy: f32, z: f32, radius: f32, tilt: &TiltState, center: Point) -> Vec<Point> {
    const SEGMENTS: usize = 48;
    (0..SEGMENTS)
        .map(|i| {
            let a = i as f32 / SEGMENTS as f32 * std::f32::consts::TAU;
            project(cx + radius * a.cos(), cy + radius * a.sin(), z, tilt, center)
        })
        .collect()
}

struct TiltFace {
    id: CardId,
    angles: TiltState,
    palette: Palette,
}

#[derive(Debug, Clone, Default)]
struct HoverState {
    inside: bool,
}

impl Program<Message> for TiltFace {
    type State = HoverState;

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let center = frame.center();
        let tilt = &self.angles;

        let hw = (bounds.width / 2.0 - MARGIN).max(1.0);
        let hh = (bounds.height / 2.0 - MARGIN).max(1.0);

        let corners: Vec<Point> = [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)]
            .iter()
            .map(|&(x, y)| project(x, y, 0.0, tilt, center))
            .collect();
        if let Some(face) = polygon(&corners) {
            frame.fill(&face, self.palette.face);
            frame.stroke(
                &face,
                Stroke::default()
                    .with_color(self.palette.border)
                    .with_width(1.0),
            );
        }

        // Emblem floats above the face, orbs at their own depths
        let radius = hw.min(hh) * 0.45;
        let layers = [
            (-hw, -hh * 0.5, 50.0, radius * 0.5, self.palette.orb_a),
            (0.0, 0.0, 40.0, radius, self.palette.emblem),
            (hw * 0.9, hh * 0.5, 30.0, radius * 0.65, self.palette.orb_b),
        ];
        for (x, y, z, r, color) in layers {
            if let Some(path) = polygon(&disc(x, y, z, r, tilt, center)) {
                frame.fill(&path, color);
            }
        }

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match event {
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if let Some(position) = cursor.position_over(bounds) {
                    state.inside = true;
                    let event = PointerEvent::Moved {
                        x: position.x,
                        y: position.y,
                        bounds: Bounds {
                            left: bounds.x,
                            top: bounds.y,
                            width: bounds.width,
                            height: bounds.height,
                        },
                    };
                    return (
                        canvas::event::Status::Ignored,
                        Some(Message::Pointer(self.id, event)),
                    );
                }
                if state.inside {
                    state.inside = false;
                    return (
                        canvas::event::Status::Ignored,
                        Some(Message::Pointer(self.id, PointerEvent::Left)),
                    );
                }
            }
            canvas::Event::Mouse(mouse::Event::CursorLeft) if state.inside => {
                state.inside = false;
                return (
                    canvas::event::Status::Ignored,
                    Some(Message::Pointer(self.id, PointerEvent::Left)),
                );
            }
            _ => {}
        }

        (canvas::event::Status::Ignored, None)
    }
}
