// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that makes passive content (usually a text label) clickable.
//! The message is published only when both the press and the release of the
//! primary button happen over the content.

use crate::ui::state::ClickGesture;
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size};

/// A widget that wraps content and publishes a message when it is clicked.
pub struct ClickableLabel<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_click: Message,
}

impl<'a, Message, Theme, Renderer> ClickableLabel<'a, Message, Theme, Renderer> {
    /// Creates a new `ClickableLabel` publishing `on_click` when activated.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>, on_click: Message) -> Self {
        Self {
            content: content.into(),
            on_click,
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for ClickableLabel<'_, Message, Theme, Renderer>
where
    Message: Clone,
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<ClickGesture>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(ClickGesture::default())
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );

        let gesture = tree.state.downcast_mut::<ClickGesture>();
        let inside = cursor.is_over(layout.bounds());

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(button)) => {
                gesture.press(*button, inside);
                if gesture.is_pressed() {
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(button)) => {
                if gesture.release(*button, inside) {
                    shell.publish(self.on_click.clone());
                    shell.capture_event();
                }
            }
            _ => {}
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        if cursor.is_over(layout.bounds()) {
            return mouse::Interaction::Pointer;
        }

        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<ClickableLabel<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(label: ClickableLabel<'a, Message, Theme, Renderer>) -> Self {
        Self::new(label)
    }
}

/// Helper function to create a clickable label.
pub fn clickable_label<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    on_click: Message,
) -> ClickableLabel<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    ClickableLabel::new(content, on_click)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::advanced::clipboard;
    use iced::widget::{text, Space};
    use iced::Point;

    #[derive(Debug, Clone, PartialEq)]
    enum Message {
        Clicked,
    }

    #[test]
    fn state_starts_idle() {
        let label: ClickableLabel<'_, Message, iced::Theme, iced::Renderer> =
            clickable_label(text("Sign up"), Message::Clicked);

        let state = label.state();
        assert_eq!(label.tag(), tree::Tag::of::<ClickGesture>());
        assert!(!state.downcast_ref::<ClickGesture>().is_pressed());
    }

    #[test]
    fn wraps_a_single_child() {
        let label: ClickableLabel<'_, Message, iced::Theme, iced::Renderer> =
            clickable_label(text("Sign up"), Message::Clicked);

        assert_eq!(label.children().len(), 1);
        assert_eq!(label.on_click, Message::Clicked);
    }

    fn inside() -> Point {
        Point::new(50.0, 10.0)
    }

    fn outside() -> Point {
        Point::new(150.0, 10.0)
    }

    fn press(button: mouse::Button, at: Point) -> (Event, Point) {
        (Event::Mouse(mouse::Event::ButtonPressed(button)), at)
    }

    fn release(button: mouse::Button, at: Point) -> (Event, Point) {
        (Event::Mouse(mouse::Event::ButtonReleased(button)), at)
    }

    /// Feeds `events` to a 100x20 label at the origin and counts the
    /// messages it publishes.
    fn clicks(events: &[(Event, Point)]) -> usize {
        let mut element: Element<'_, Message, iced::Theme, ()> =
            clickable_label(Space::new(), Message::Clicked).into();
        let mut tree = widget::Tree::new(&element);
        let node = layout::Node::new(Size::new(100.0, 20.0));
        let viewport = Rectangle::with_size(Size::new(400.0, 400.0));
        let mut published = Vec::new();

        for (event, position) in events {
            let mut shell = Shell::new(&mut published);
            element.as_widget_mut().update(
                &mut tree,
                event,
                Layout::new(&node),
                mouse::Cursor::Available(*position),
                &(),
                &mut clipboard::Null,
                &mut shell,
                &viewport,
            );
        }

        assert!(published.iter().all(|message| *message == Message::Clicked));
        published.len()
    }

    #[test]
    fn press_and_release_inside_clicks_once() {
        let left = mouse::Button::Left;
        assert_eq!(clicks(&[press(left, inside()), release(left, inside())]), 1);
    }

    #[test]
    fn release_outside_cancels() {
        let left = mouse::Button::Left;
        assert_eq!(clicks(&[press(left, inside()), release(left, outside())]), 0);
    }

    #[test]
    fn press_outside_never_clicks() {
        let left = mouse::Button::Left;
        assert_eq!(clicks(&[press(left, outside()), release(left, inside())]), 0);
    }

    #[test]
    fn cancelled_gesture_does_not_leak_into_next() {
        let left = mouse::Button::Left;
        assert_eq!(
            clicks(&[
                press(left, inside()),
                release(left, outside()),
                press(left, inside()),
                release(left, inside()),
            ]),
            1
        );
    }

    #[test]
    fn other_button_release_disarms() {
        assert_eq!(
            clicks(&[
                press(mouse::Button::Left, inside()),
                release(mouse::Button::Right, inside()),
                release(mouse::Button::Left, inside()),
            ]),
            0
        );
    }

    #[test]
    fn each_full_gesture_clicks() {
        let left = mouse::Button::Left;
        assert_eq!(
            clicks(&[
                press(left, inside()),
                release(left, inside()),
                press(left, inside()),
                release(left, inside()),
            ]),
            2
        );
    }
}
