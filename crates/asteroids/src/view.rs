//! Drawing
//!
//! Turns the game state into renderer calls. Nothing here mutates the game.

use rust_engine::foundation::math::Vec2;
use rust_engine::render::{Color, Renderer};

use crate::assets::SpriteLookup;
use crate::components::Circular;
use crate::game::{AsteroidsGame, GameState};
use crate::session::GameSession;

/// Approximate advance of one glyph, used to right-align and center text
const GLYPH_WIDTH: f32 = 12.0;
/// Line spacing for text blocks
const LINE_HEIGHT: f32 = 36.0;
/// Gap between HUD text and the screen edge
const HUD_MARGIN: f32 = 10.0;

/// Draw one frame for the current screen
pub fn draw(game: &AsteroidsGame, sprites: &dyn SpriteLookup, renderer: &mut dyn Renderer) {
    renderer.clear(Color::BLACK);
    let screen = screen_size(renderer);

    match game.state() {
        GameState::Menu => draw_menu(renderer, screen),
        GameState::Playing => {
            draw_world(game.session(), sprites, renderer);
            draw_hud(game, renderer, screen);
        }
        GameState::HighScores => draw_high_scores(game, renderer, screen),
        GameState::NameEntry => draw_name_entry(game, renderer, screen),
    }
}

fn screen_size(renderer: &dyn Renderer) -> Vec2 {
    let (width, height) = renderer.size();
    Vec2::new(width as f32, height as f32)
}

fn text_width(text: &str) -> f32 {
    text.chars().count() as f32 * GLYPH_WIDTH
}

/// Draw `text` horizontally centered at height `y`
fn centered(renderer: &mut dyn Renderer, text: &str, screen: Vec2, y: f32, color: Color) {
    let x = (screen.x - text_width(text)) * 0.5;
    renderer.draw_text(text, Vec2::new(x, y), color);
}

/// Live entities: asteroids, shots, then the ship on top
pub fn draw_world(session: &GameSession, sprites: &dyn SpriteLookup, renderer: &mut dyn Renderer) {
    for (_, asteroid) in session.asteroids() {
        renderer.draw_sprite(
            sprites.asteroid(asteroid.sprite_variant),
            asteroid.position(),
            asteroid.rotation,
            asteroid.radius() * 2.0,
        );
    }

    for (_, shot) in session.shots() {
        renderer.draw_sprite(sprites.shot(), shot.position(), 0.0, shot.radius() * 2.0);
    }

    // Heading turns clockwise on a y-down screen
    let player = &session.player;
    renderer.draw_sprite(sprites.ship(), player.position(), -player.rotation, player.radius() * 2.0);
}

fn draw_hud(game: &AsteroidsGame, renderer: &mut dyn Renderer, screen: Vec2) {
    let session = game.session();

    let score = format!("Score: {}", session.score);
    let score_x = screen.x - HUD_MARGIN - text_width(&score);
    renderer.draw_text(&score, Vec2::new(score_x, HUD_MARGIN), Color::WHITE);

    let lives = format!("Lives: {}", session.lives);
    renderer.draw_text(&lives, Vec2::new(HUD_MARGIN, HUD_MARGIN), Color::WHITE);

    if let Some(message) = game.message() {
        let color = if game.is_game_over() { Color::RED } else { Color::YELLOW };
        centered(renderer, message, screen, screen.y * 0.5 - LINE_HEIGHT * 2.0, color);
    }
}

fn draw_menu(renderer: &mut dyn Renderer, screen: Vec2) {
    let top = screen.y / 3.0;
    centered(renderer, "ASTEROIDS", screen, top, Color::WHITE);
    for (line, option) in ["1 - Start Game", "2 - High Scores", "3 - Quit"].iter().enumerate() {
        let y = top + LINE_HEIGHT * (line as f32 + 2.0);
        centered(renderer, option, screen, y, Color::GREY);
    }
}

fn draw_high_scores(game: &AsteroidsGame, renderer: &mut dyn Renderer, screen: Vec2) {
    let top = screen.y / 6.0;
    centered(renderer, "HIGH SCORES", screen, top, Color::WHITE);

    let entries = game.high_scores().entries();
    if entries.is_empty() {
        centered(renderer, "No scores yet", screen, top + LINE_HEIGHT * 2.0, Color::GREY);
    }
    for (rank, entry) in entries.iter().enumerate() {
        let row = format!("{:>2}. {:<20} {:>8}", rank + 1, entry.name, entry.score);
        centered(renderer, &row, screen, top + LINE_HEIGHT * (rank as f32 + 2.0), Color::WHITE);
    }

    centered(renderer, "Esc - Back", screen, screen.y - LINE_HEIGHT * 2.0, Color::GREY);
}

fn draw_name_entry(game: &AsteroidsGame, renderer: &mut dyn Renderer, screen: Vec2) {
    let top = screen.y / 3.0;
    let heading = format!("NEW HIGH SCORE: {}", game.session().score);
    centered(renderer, &heading, screen, top, Color::YELLOW);
    centered(renderer, "Enter your name:", screen, top + LINE_HEIGHT * 2.0, Color::WHITE);

    let field = format!("{}_", game.name_buffer());
    centered(renderer, &field, screen, top + LINE_HEIGHT * 3.0, Color::WHITE);
    centered(renderer, "Enter - Confirm", screen, top + LINE_HEIGHT * 5.0, Color::GREY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Asteroid;
    use crate::config::GameConfig;
    use rust_engine::assets::{ImageData, ImageHandle};
    use rust_engine::backend::HeadlessRenderer;
    use rust_engine::foundation::collections::HandleMap;
    use rust_engine::input::{InputManager, KeyCode};
    use rust_engine::render::DrawCommand;

    struct FakeSprites {
        ship: ImageHandle,
        asteroid: ImageHandle,
        shot: ImageHandle,
    }

    impl FakeSprites {
        fn new() -> Self {
            let mut images: HandleMap<ImageData> = HandleMap::new();
            let mut next = || ImageHandle::new(images.insert(ImageData::solid_color(1, 1, [0; 4])));
            Self {
                ship: next(),
                asteroid: next(),
                shot: next(),
            }
        }
    }

    impl SpriteLookup for FakeSprites {
        fn ship(&self) -> ImageHandle {
            self.ship
        }

        fn asteroid(&self, _variant: u32) -> ImageHandle {
            self.asteroid
        }

        fn shot(&self) -> ImageHandle {
            self.shot
        }
    }

    fn press(game: &mut AsteroidsGame, key: KeyCode) {
        let mut input = InputManager::new();
        input.handle_key_input(key, true);
        game.tick(&input, 1.0 / 60.0);
    }

    #[test]
    fn test_menu_screen_text() {
        let game = AsteroidsGame::with_seed(GameConfig::default(), 1);
        let mut renderer = HeadlessRenderer::new(1280, 720);
        draw(&game, &FakeSprites::new(), &mut renderer);

        assert_eq!(renderer.pending()[0], DrawCommand::Clear(Color::BLACK));
        let text = renderer.pending_text();
        assert!(text.contains(&"ASTEROIDS"));
        assert!(text.contains(&"1 - Start Game"));
        assert!(text.contains(&"3 - Quit"));
    }

    #[test]
    fn test_play_screen_draws_entities_and_hud() {
        let sprites = FakeSprites::new();
        let mut game = AsteroidsGame::with_seed(GameConfig::default(), 2);
        press(&mut game, KeyCode::Num1);
        press(&mut game, KeyCode::Space);

        let mut renderer = HeadlessRenderer::new(1280, 720);
        draw(&game, &sprites, &mut renderer);

        let frame = renderer.pending();
        assert_eq!(frame.iter().filter(|cmd| cmd.uses_image(sprites.ship)).count(), 1);
        assert_eq!(frame.iter().filter(|cmd| cmd.uses_image(sprites.shot)).count(), 1);
        assert_eq!(frame.iter().filter(|cmd| cmd.uses_image(sprites.asteroid)).count(), 0);

        let text = renderer.pending_text();
        assert!(text.contains(&"Score: 0"));
        assert!(text.contains(&"Lives: 3"));
    }

    #[test]
    fn test_sprites_sized_by_radius() {
        let sprites = FakeSprites::new();
        let mut session = GameSession::new(&GameConfig::default());
        let mut rock = Asteroid::new(Vec2::new(100.0, 100.0), Vec2::zeros(), 3, 20.0);
        rock.rotation = 33.0;
        session.add_asteroid(rock);
        session.player.rotation = 90.0;

        let mut renderer = HeadlessRenderer::new(1280, 720);
        renderer.clear(Color::BLACK);
        draw_world(&session, &sprites, &mut renderer);

        let sprite_of = |image: ImageHandle| {
            renderer
                .pending()
                .iter()
                .find_map(|cmd| match cmd {
                    DrawCommand::Sprite { image: drawn, rotation_degrees, extent, .. } if *drawn == image => {
                        Some((*rotation_degrees, *extent))
                    }
                    _ => None,
                })
        };
        assert_eq!(sprite_of(sprites.asteroid), Some((33.0, 120.0)));
        assert_eq!(sprite_of(sprites.ship), Some((-90.0, 40.0)));
    }

    #[test]
    fn test_score_is_right_aligned() {
        let mut game = AsteroidsGame::with_seed(GameConfig::default(), 3);
        press(&mut game, KeyCode::Num1);
        let mut renderer = HeadlessRenderer::new(1280, 720);
        draw(&game, &FakeSprites::new(), &mut renderer);

        let score_x = renderer.pending().iter().find_map(|cmd| match cmd {
            DrawCommand::Text { text, position, .. } if text.starts_with("Score") => Some(position.x),
            _ => None,
        });
        let expected = 1280.0 - HUD_MARGIN - text_width("Score: 0");
        assert_eq!(score_x, Some(expected));
    }

    #[test]
    fn test_high_score_screen_lists_entries() {
        let mut game = AsteroidsGame::with_seed(GameConfig::default(), 4);
        press(&mut game, KeyCode::Num2);
        let mut renderer = HeadlessRenderer::new(1280, 720);
        draw(&game, &FakeSprites::new(), &mut renderer);

        let text = renderer.pending_text();
        assert!(text.contains(&"HIGH SCORES"));
        assert!(text.contains(&"No scores yet"));
        assert!(text.contains(&"Esc - Back"));
    }
}
