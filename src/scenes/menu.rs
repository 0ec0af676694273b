//! Main menu

use super::{FieldLayout, Lifecycle, SceneBehavior, SceneKind, Transition, TransitionRequest};
use crate::assets::AssetRegistry;
use crate::config::GameConfig;
use crate::gui::Button;
use crate::input_system::GameEvent;
use crate::text::{render_text, TextImage};
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

const BUTTON_WIDTH: u32 = 320;
const BUTTON_HEIGHT: u32 = 60;
const BUTTON_GAP: i32 = 12;

pub struct MenuScene {
    lifecycle: Lifecycle,
    title: TextImage,
    buttons: Vec<Button>,
    requests: TransitionRequest,
    width: u32,
    height: u32,
}

impl MenuScene {
    pub fn new(config: &GameConfig) -> Self {
        let width = config.window.width;
        let height = config.window.height;
        let requests = TransitionRequest::new();

        let x = (width as i32 - BUTTON_WIDTH as i32) / 2;
        let start_y = height as i32 / 2 - BUTTON_HEIGHT as i32;
        let entries = [
            ("Play", Transition::Switch(SceneKind::PlayField(FieldLayout::Swarm))),
            ("How to Play", Transition::Switch(SceneKind::Instructions)),
            ("Credits", Transition::Switch(SceneKind::Credits)),
            ("Quit", Transition::Quit),
        ];

        let buttons = entries
            .iter()
            .enumerate()
            .map(|(i, (text, transition))| {
                let y = start_y + i as i32 * (BUTTON_HEIGHT as i32 + BUTTON_GAP);
                Button::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT, text)
                    .with_callback(requests.binder(*transition))
            })
            .collect();

        MenuScene {
            lifecycle: Lifecycle::new(),
            title: render_text(&config.window.title, 6, Color::RGB(230, 230, 230)),
            buttons,
            requests,
            width,
            height,
        }
    }

    #[cfg(test)]
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }
}

impl SceneBehavior for MenuScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Menu
    }

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }

    fn handle_event(&mut self, event: &GameEvent) -> Transition {
        match event {
            GameEvent::KeyDown(Keycode::Return) => {
                Transition::Switch(SceneKind::PlayField(FieldLayout::Basic))
            }
            GameEvent::Press { .. } => {
                for button in self.buttons.iter_mut() {
                    if button.on_click(event) {
                        break;
                    }
                }
                self.requests.take()
            }
            _ => Transition::Stay,
        }
    }

    fn draw(&self, canvas: &mut Canvas<Window>, _assets: &AssetRegistry<'_>) -> Result<(), String> {
        canvas.set_draw_color(Color::RGB(30, 30, 60));
        canvas.clear();

        self.title
            .draw_centered(canvas, self.width as i32 / 2, self.height as i32 / 4)?;

        for button in &self.buttons {
            button.draw(canvas)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hit_region::Clickable;

    fn press_on(button: &Button) -> GameEvent {
        let center = button.bounds().center();
        GameEvent::Press {
            x: center.x(),
            y: center.y(),
        }
    }

    #[test]
    fn test_buttons_are_centred_and_stacked() {
        let menu = MenuScene::new(&GameConfig::default());
        let rects: Vec<_> = menu.buttons().iter().map(|b| b.bounds()).collect();

        assert_eq!(rects.len(), 4);
        assert_eq!(rects[0].x(), (960 - 320) / 2);
        assert_eq!(rects[0].y(), 540 / 2 - 60);
        assert_eq!(rects[1].y() - rects[0].y(), 72);
    }

    #[test]
    fn test_each_button_requests_its_scene() {
        let expected = [
            Transition::Switch(SceneKind::PlayField(FieldLayout::Swarm)),
            Transition::Switch(SceneKind::Instructions),
            Transition::Switch(SceneKind::Credits),
            Transition::Quit,
        ];

        for (i, want) in expected.iter().enumerate() {
            let mut menu = MenuScene::new(&GameConfig::default());
            let event = press_on(&menu.buttons()[i]);
            assert_eq!(menu.handle_event(&event), *want);
        }
    }

    #[test]
    fn test_press_on_background_stays() {
        let mut menu = MenuScene::new(&GameConfig::default());
        assert_eq!(menu.handle_event(&GameEvent::Press { x: 5, y: 5 }), Transition::Stay);
    }

    #[test]
    fn test_return_starts_basic_field() {
        let mut menu = MenuScene::new(&GameConfig::default());
        assert_eq!(
            menu.handle_event(&GameEvent::KeyDown(Keycode::Return)),
            Transition::Switch(SceneKind::PlayField(FieldLayout::Basic))
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut menu = MenuScene::new(&GameConfig::default());
        assert_eq!(menu.handle_event(&GameEvent::KeyDown(Keycode::A)), Transition::Stay);
    }
}
