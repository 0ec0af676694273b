use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

/// Input events as scenes see them
///
/// Raw SDL2 events are reduced to the three things the game reacts to.
/// Everything else (motion, releases, window events) is dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Any mouse button pressed at logical coordinates
    Press { x: i32, y: i32 },
    KeyDown(Keycode),
    /// Window closed or the exit key pressed
    Quit,
}

impl GameEvent {
    /// Press position, if this is a press
    pub fn press_point(&self) -> Option<(i32, i32)> {
        match self {
            GameEvent::Press { x, y } => Some((*x, *y)),
            _ => None,
        }
    }
}

/// InputSystem turns SDL2 events into [`GameEvent`]s
///
/// Events come out in arrival order so the game loop can dispatch them
/// one at a time.
pub struct InputSystem {
    exit_key: Keycode,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            exit_key: Keycode::Escape,
        }
    }

    /// Drains every pending SDL2 event for this frame
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameEvent> {
        event_pump
            .poll_iter()
            .filter_map(|event| self.translate(&event))
            .collect()
    }

    /// Translates a single SDL2 event
    pub fn translate(&self, event: &Event) -> Option<GameEvent> {
        match event {
            Event::Quit { .. } => Some(GameEvent::Quit),
            Event::KeyDown {
                keycode: Some(key), ..
            } => {
                if *key == self.exit_key {
                    Some(GameEvent::Quit)
                } else {
                    Some(GameEvent::KeyDown(*key))
                }
            }
            Event::MouseButtonDown { x, y, .. } => Some(GameEvent::Press { x: *x, y: *y }),
            _ => None,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::{Mod, Scancode};
    use sdl2::mouse::MouseButton;

    fn key_down(key: Keycode) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(key),
            scancode: Scancode::from_keycode(key),
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    #[test]
    fn test_escape_becomes_quit() {
        let input = InputSystem::new();
        assert_eq!(input.translate(&key_down(Keycode::Escape)), Some(GameEvent::Quit));
    }

    #[test]
    fn test_other_keys_pass_through() {
        let input = InputSystem::new();
        assert_eq!(
            input.translate(&key_down(Keycode::Return)),
            Some(GameEvent::KeyDown(Keycode::Return))
        );
    }

    #[test]
    fn test_any_mouse_button_is_a_press() {
        let input = InputSystem::new();
        for button in [MouseButton::Left, MouseButton::Right, MouseButton::Middle] {
            let event = Event::MouseButtonDown {
                timestamp: 0,
                window_id: 0,
                which: 0,
                mouse_btn: button,
                clicks: 1,
                x: 12,
                y: 34,
            };
            assert_eq!(input.translate(&event), Some(GameEvent::Press { x: 12, y: 34 }));
        }
    }

    #[test]
    fn test_window_close_is_quit() {
        let input = InputSystem::new();
        assert_eq!(input.translate(&Event::Quit { timestamp: 0 }), Some(GameEvent::Quit));
    }

    #[test]
    fn test_release_is_ignored() {
        let input = InputSystem::new();
        let event = Event::MouseButtonUp {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mouse_btn: MouseButton::Left,
            clicks: 1,
            x: 0,
            y: 0,
        };
        assert_eq!(input.translate(&event), None);
    }
}
