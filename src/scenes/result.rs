//! End-of-round screens

use super::{FieldLayout, Lifecycle, SceneBehavior, SceneKind, Transition, TransitionRequest};
use crate::assets::AssetRegistry;
use crate::config::GameConfig;
use crate::gui::Button;
use crate::input_system::GameEvent;
use crate::text::{render_text, TextImage};
use rand::Rng;
use rand::rngs::StdRng;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

const BUTTON_WIDTH: u32 = 300;
const BUTTON_HEIGHT: u32 = 60;
const BUTTON_GAP: i32 = 15;

const TAUNTS: [&str; 16] = [
    "Oof... that was embarrassing.",
    "Pro tip: Use your eyes",
    "Even my grandma could do better.",
    "Someone get this player a tutorial.",
    "Skill level: potato.",
    "You just redefined failure.",
    "This is... sad",
    "The controls are fine, you're the problem.",
    "You're doing a fantastic job... at losing.",
    "Nice, 10/10, would cringe again.",
    "Even AI would beat you at this (tried & tested btw).",
    "Even a blindfolded chicken could find Baldo better.",
    "The aim is simple... too bad.",
    "You're an inspiration... to a bunch of trolls.",
    "Maybe it's time to reconsider your life choices.",
    "Skill? What's that?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    Won,
    Failed,
}

pub struct ResultScreen {
    lifecycle: Lifecycle,
    result: RoundResult,
    title: TextImage,
    taunt: Option<TextImage>,
    buttons: Vec<Button>,
    requests: TransitionRequest,
    width: u32,
    height: u32,
}

impl ResultScreen {
    pub fn won(config: &GameConfig) -> Self {
        Self::build(RoundResult::Won, config, None)
    }

    /// Fail screen with a taunt picked at random
    pub fn failed(config: &GameConfig, rng: &mut StdRng) -> Self {
        let taunt = TAUNTS[rng.gen_range(0..TAUNTS.len())];
        Self::build(RoundResult::Failed, config, Some(taunt))
    }

    fn build(result: RoundResult, config: &GameConfig, taunt: Option<&str>) -> Self {
        let width = config.window.width;
        let height = config.window.height;
        let requests = TransitionRequest::new();

        let (title, retry_text, start_y) = match result {
            RoundResult::Won => ("YOU WON", "Play Again", height as i32 / 2 + 20),
            RoundResult::Failed => ("YOU FAILED", "Try Again", height as i32 / 2 + 40),
        };
        let x = (width as i32 - BUTTON_WIDTH as i32) / 2;
        let swarm = Transition::Switch(SceneKind::PlayField(FieldLayout::Swarm));

        let buttons = vec![
            Button::new(x, start_y, BUTTON_WIDTH, BUTTON_HEIGHT, retry_text)
                .with_callback(requests.binder(swarm)),
            Button::new(
                x,
                start_y + BUTTON_HEIGHT as i32 + BUTTON_GAP,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
                "Main Menu",
            )
            .with_callback(requests.binder(Transition::Switch(SceneKind::Menu))),
        ];

        ResultScreen {
            lifecycle: Lifecycle::new(),
            result,
            title: render_text(title, 8, Color::RGB(255, 255, 255)),
            taunt: taunt.map(|line| render_text(line, 2, Color::RGB(255, 220, 220))),
            buttons,
            requests,
            width,
            height,
        }
    }

    #[cfg(test)]
    pub fn result(&self) -> RoundResult {
        self.result
    }

    #[cfg(test)]
    pub fn taunt(&self) -> Option<&str> {
        self.taunt.as_ref().map(|t| t.text())
    }

    #[cfg(test)]
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }
}

impl SceneBehavior for ResultScreen {
    fn kind(&self) -> SceneKind {
        match self.result {
            RoundResult::Won => SceneKind::Win,
            RoundResult::Failed => SceneKind::Fail,
        }
    }

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }

    fn handle_event(&mut self, event: &GameEvent) -> Transition {
        if event.press_point().is_none() {
            return Transition::Stay;
        }
        for button in self.buttons.iter_mut() {
            if button.on_click(event) {
                break;
            }
        }
        self.requests.take()
    }

    fn draw(&self, canvas: &mut Canvas<Window>, _assets: &AssetRegistry<'_>) -> Result<(), String> {
        let background = match self.result {
            RoundResult::Won => Color::RGB(20, 120, 40),
            RoundResult::Failed => Color::RGB(150, 20, 20),
        };
        canvas.set_draw_color(background);
        canvas.clear();

        let cx = self.width as i32 / 2;
        let cy = self.height as i32 / 2;
        self.title.draw_centered(canvas, cx, cy - 120)?;
        if let Some(taunt) = &self.taunt {
            taunt.draw_centered(canvas, cx, cy - 50)?;
        }

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
    use rand::SeedableRng;

    fn press_on(button: &Button) -> GameEvent {
        let center = button.bounds().center();
        GameEvent::Press {
            x: center.x(),
            y: center.y(),
        }
    }

    #[test]
    fn test_won_screen_layout() {
        let screen = ResultScreen::won(&GameConfig::default());
        assert_eq!(screen.kind(), SceneKind::Win);
        assert_eq!(screen.taunt(), None);

        let buttons = screen.buttons();
        assert_eq!(buttons[0].text(), "Play Again");
        assert_eq!(buttons[0].bounds().y(), 270 + 20);
        assert_eq!(buttons[1].text(), "Main Menu");
        assert_eq!(buttons[1].bounds().y(), 270 + 20 + 75);
        assert_eq!(buttons[0].bounds().x(), (960 - 300) / 2);
    }

    #[test]
    fn test_failed_screen_has_known_taunt() {
        let mut rng = StdRng::seed_from_u64(7);
        let screen = ResultScreen::failed(&GameConfig::default(), &mut rng);

        assert_eq!(screen.kind(), SceneKind::Fail);
        assert_eq!(screen.buttons()[0].text(), "Try Again");
        assert_eq!(screen.buttons()[0].bounds().y(), 270 + 40);
        let taunt = screen.taunt().unwrap();
        assert!(TAUNTS.contains(&taunt));
    }

    #[test]
    fn test_buttons_request_transitions() {
        let builders: [fn(&mut StdRng) -> ResultScreen; 2] = [
            |_| ResultScreen::won(&GameConfig::default()),
            |rng| ResultScreen::failed(&GameConfig::default(), rng),
        ];
        for screen_of in builders {
            let mut rng = StdRng::seed_from_u64(1);

            let mut screen = screen_of(&mut rng);
            let event = press_on(&screen.buttons()[0]);
            assert_eq!(
                screen.handle_event(&event),
                Transition::Switch(SceneKind::PlayField(FieldLayout::Swarm))
            );

            let mut screen = screen_of(&mut rng);
            let event = press_on(&screen.buttons()[1]);
            assert_eq!(screen.handle_event(&event), Transition::Switch(SceneKind::Menu));
        }
    }

    #[test]
    fn test_press_elsewhere_and_keys_stay() {
        let mut screen = ResultScreen::won(&GameConfig::default());
        assert_eq!(screen.handle_event(&GameEvent::Press { x: 0, y: 0 }), Transition::Stay);
        assert_eq!(
            screen.handle_event(&GameEvent::KeyDown(sdl2::keyboard::Keycode::Return)),
            Transition::Stay
        );
    }

    #[test]
    fn test_taunts_are_ascii() {
        for line in TAUNTS {
            assert!(line.is_ascii(), "{}", line);
        }
    }
}
