// SPDX-License-Identifier: MPL-2.0
//! Loading spinner widget drawn on a Canvas.
//!
//! Pure presentation: the widget renders a faint ring with a rotating arc at
//! whatever angle it is given. Animation comes from the caller advancing the
//! angle on a timer tick.

use crate::ui::design_tokens::{opacity, sizing};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Sweep of the rotating arc (three quarters of a turn).
const ARC_SWEEP: f32 = 1.5 * PI;

/// Number of line segments used to approximate the arc.
const ARC_SEGMENTS: u32 = 24;

const RING_WIDTH: f32 = 4.0;

/// Loading spinner with a rotating arc.
pub struct Spinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    diameter: f32,
}

impl Spinner {
    /// Creates a spinner with the given color and rotation angle in radians.
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation: rotation % TAU,
            color,
            diameter: sizing::SPINNER,
        }
    }

    /// Overrides the spinner diameter.
    #[must_use]
    pub fn diameter(mut self, diameter: f32) -> Self {
        self.diameter = diameter;
        self
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let diameter = self.diameter;
        Canvas::new(self)
            .width(Length::Fixed(diameter))
            .height(Length::Fixed(diameter))
            .into()
    }
}

impl<Message> canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - RING_WIDTH;

                // Faint full ring underneath the arc
                let ring = Path::circle(center, radius);
                frame.stroke(
                    &ring,
                    Stroke::default().with_width(RING_WIDTH).with_color(Color {
                        a: opacity::SUBTLE,
                        ..self.color
                    }),
                );

                // Rotating arc, approximated with short line segments
                let start_angle = self.rotation - PI / 2.0;
                let mut builder = canvas::path::Builder::new();
                builder.move_to(point_on_circle(center, radius, start_angle));

                #[allow(clippy::cast_precision_loss)]
                for i in 1..=ARC_SEGMENTS {
                    let t = i as f32 / ARC_SEGMENTS as f32;
                    builder.line_to(point_on_circle(center, radius, start_angle + ARC_SWEEP * t));
                }

                frame.stroke(
                    &builder.build(),
                    Stroke::default()
                        .with_width(RING_WIDTH)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

fn point_on_circle(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_is_normalized_into_one_turn() {
        let spinner = Spinner::new(Color::WHITE, TAU + 1.0);
        assert!(spinner.rotation < TAU);
        assert!((spinner.rotation - 1.0).abs() < 1e-5);
    }

    #[test]
    fn point_on_circle_at_zero_angle_is_right_of_center() {
        let p = point_on_circle(Point::new(10.0, 10.0), 5.0, 0.0);
        assert!((p.x - 15.0).abs() < 1e-5);
        assert!((p.y - 10.0).abs() < 1e-5);
    }
}
