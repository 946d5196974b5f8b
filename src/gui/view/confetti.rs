//! gui/view/confetti.rs
//! Draws the confetti burst on a full-window canvas. The simulation
//! lives in core; this layer only scales normalized positions to the
//! window and paints rotated paper rectangles.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Program};
use iced::{Element, Length, Point, Radians, Renderer, Size, Theme, Vector, mouse};

use super::super::state::Message;
use super::super::theme;
use crate::core::confetti::ConfettiBurst;

pub(crate) fn layer(burst: &ConfettiBurst) -> Element<'_, Message> {
    Canvas::new(ConfettiLayer { burst })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

struct ConfettiLayer<'a> {
    burst: &'a ConfettiBurst,
}

impl<Message> Program<Message> for ConfettiLayer<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for p in self.burst.particles() {
            let center = Point::new(p.x * bounds.width, p.y * bounds.height);
            let color = theme::confetti_color(p.color_index, p.alpha());

            frame.with_save(|frame| {
                frame.translate(Vector::new(center.x, center.y));
                frame.rotate(Radians(p.rotation));
                // Paper pieces are wider than tall, like torn streamers.
                frame.fill_rectangle(
                    Point::new(-p.size / 2.0, -p.size * 0.3),
                    Size::new(p.size, p.size * 0.6),
                    color,
                );
            });
        }

        vec![frame.into_geometry()]
    }
}
