// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! History navigation is driven by native input: `Alt+Left` or `Backspace`
//! goes back, `Alt+Right` goes forward, and so do the mouse side buttons.
//! The subscription is created once and lives as long as the application.

use super::history::Direction;
use super::Message;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, mouse, Event, Subscription};

/// Routes back/forward input to [`Message::Navigate`].
pub fn create_navigation_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match status {
        event::Status::Ignored => navigation_for(&event).map(Message::Navigate),
        event::Status::Captured => None,
    })
}

/// Maps a native event to a history direction.
fn navigation_for(event: &Event) -> Option<Direction> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            keyboard_navigation(key, *modifiers)
        }
        Event::Mouse(mouse::Event::ButtonPressed(button)) => mouse_navigation(*button),
        _ => None,
    }
}

fn keyboard_navigation(key: &Key, modifiers: Modifiers) -> Option<Direction> {
    match key {
        Key::Named(Named::ArrowLeft) if modifiers.alt() => Some(Direction::Back),
        Key::Named(Named::ArrowRight) if modifiers.alt() => Some(Direction::Forward),
        Key::Named(Named::Backspace) if modifiers.is_empty() => Some(Direction::Back),
        _ => None,
    }
}

fn mouse_navigation(button: mouse::Button) -> Option<Direction> {
    match button {
        mouse::Button::Back => Some(Direction::Back),
        mouse::Button::Forward => Some(Direction::Forward),
        _ => None,
    }
}
