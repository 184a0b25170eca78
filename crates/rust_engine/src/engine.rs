//! Core engine implementation

use crate::{
    application::{Application, AppEvent},
    assets::AssetManager,
    events::EventSource,
    foundation::time::Timer,
    input::InputManager,
    render::Renderer,
};
use thiserror::Error;

/// Main engine struct
///
/// The engine coordinates all subsystems and manages the main loop.
pub struct Engine {
    /// Asset management system
    pub assets: AssetManager,

    /// Input handling system
    pub input: InputManager,

    renderer: Box<dyn Renderer>,
    events: Box<dyn EventSource>,

    /// Frame timing
    timer: Timer,

    /// Engine configuration
    config: EngineConfig,

    /// Whether the engine should continue running
    running: bool,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(
        config: EngineConfig,
        renderer: Box<dyn Renderer>,
        events: Box<dyn EventSource>,
    ) -> Self {
        log::info!("Initializing engine...");

        let (width, height) = renderer.size();
        log::info!(
            "{}: {}x{} surface, {} fps cap",
            config.window.title,
            width,
            height,
            config.target_fps
        );

        Self {
            assets: AssetManager::new(&config.assets),
            input: InputManager::new(),
            renderer,
            events,
            timer: Timer::with_target_fps(config.target_fps),
            config,
            running: true,
        }
    }

    /// Run the engine main loop with the given application
    pub fn run<T: Application>(
        config: EngineConfig,
        renderer: Box<dyn Renderer>,
        events: Box<dyn EventSource>,
        app: &mut T,
    ) -> Result<(), EngineError> {
        let mut engine = Self::new(config, renderer, events);

        // Initialize application
        app.initialize(&mut engine)
            .map_err(|e| EngineError::InitializationFailed(format!("App initialization: {}", e)))?;

        log::info!("Starting main loop...");

        let mut delta_time = 0.0;
        while engine.running {
            engine.run_frame(app, delta_time)?;
            delta_time = engine.timer.tick();

            if let Some(max_frames) = engine.config.max_frames {
                if engine.timer.frame_count() >= max_frames {
                    log::info!("Frame limit of {} reached", max_frames);
                    engine.running = false;
                }
            }
        }

        // Cleanup
        app.cleanup(&mut engine);

        log::info!(
            "Engine shutdown complete after {} frames ({:.1} fps average)",
            engine.timer.frame_count(),
            engine.timer.average_fps()
        );
        Ok(())
    }

    /// One pass of poll input, update, render, present
    fn run_frame<T: Application>(&mut self, app: &mut T, delta_time: f32) -> Result<(), EngineError> {
        let frame = self.timer.frame_count();
        for event in self.events.poll_events(frame) {
            app.handle_event(self, event)
                .map_err(|e| EngineError::ApplicationError(format!("App event: {}", e)))?;
        }

        app.update(self, delta_time)
            .map_err(|e| EngineError::ApplicationError(format!("App update: {}", e)))?;

        app.render(self)
            .map_err(|e| EngineError::ApplicationError(format!("App render: {}", e)))?;

        self.renderer
            .present()
            .map_err(|e| EngineError::RenderError(e.to_string()))?;

        self.input.update();
        Ok(())
    }

    /// Handle an application event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::WindowCloseRequested => {
                log::info!("Window close requested");
                self.running = false;
            }
            AppEvent::KeyInput { key, pressed } => {
                self.input.handle_key_input(key, pressed);
            }
            AppEvent::CharTyped(c) => {
                self.input.handle_char(c);
            }
        }
    }

    /// Request engine shutdown at the end of the current frame
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }

    /// Whether the loop will run another frame
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Get the renderer
    pub fn renderer_mut(&mut self) -> &mut dyn Renderer {
        self.renderer.as_mut()
    }

    /// Get the input manager
    pub fn input(&self) -> &InputManager {
        &self.input
    }

    /// Get the asset manager
    pub fn assets(&self) -> &AssetManager {
        &self.assets
    }

    /// Get mutable access to the asset manager
    pub fn assets_mut(&mut self) -> &mut AssetManager {
        &mut self.assets
    }

    /// Get the current frame delta time
    pub fn delta_time(&self) -> f32 {
        self.timer.delta_time()
    }

    /// Frames completed so far
    pub fn frame_count(&self) -> u64 {
        self.timer.frame_count()
    }
}

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Window configuration
    pub window: WindowConfig,

    /// Asset system configuration
    pub assets: AssetConfig,

    /// Frame rate cap; 0 runs uncapped
    pub target_fps: u32,

    /// Stop after this many frames (headless runs)
    pub max_frames: Option<u64>,
}

/// Window configuration
#[derive(Debug, Clone)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Window width
    pub width: u32,

    /// Window height
    pub height: u32,
}

/// Asset system configuration
#[derive(Debug, Clone)]
pub struct AssetConfig {
    /// Asset search paths
    pub search_paths: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig {
                title: "Rust Engine Application".to_string(),
                width: 1280,
                height: 720,
            },
            assets: AssetConfig {
                search_paths: vec!["resources".to_string()],
            },
            target_fps: 60,
            max_frames: None,
        }
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Initialization error
    #[error("Engine initialization failed: {0}")]
    InitializationFailed(String),

    /// Rendering error
    #[error("Rendering error: {0}")]
    RenderError(String),

    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::AppError;
    use crate::backend::headless::{HeadlessRenderer, ScriptedEvents};
    use crate::foundation::math::Vec2;
    use crate::input::KeyCode;
    use crate::render::Color;

    #[derive(Default)]
    struct Probe {
        initialized: bool,
        updates: u32,
        space_frames: u32,
        cleaned_up: bool,
        fail_init: bool,
    }

    impl Application for Probe {
        fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
            if self.fail_init {
                return Err(AppError::GameLogic("refusing to start".to_string()));
            }
            self.initialized = true;
            Ok(())
        }

        fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
            self.updates += 1;
            if engine.input().is_key_held(KeyCode::Space) {
                self.space_frames += 1;
            }
            if engine.input().is_key_pressed(KeyCode::Escape) {
                engine.quit();
            }
            Ok(())
        }

        fn render(&mut self, engine: &mut Engine) -> Result<(), AppError> {
            let renderer = engine.renderer_mut();
            renderer.clear(Color::BLACK);
            renderer.draw_text("probe", Vec2::zeros(), Color::WHITE);
            Ok(())
        }

        fn cleanup(&mut self, _engine: &mut Engine) {
            self.cleaned_up = true;
        }
    }

    fn uncapped() -> EngineConfig {
        EngineConfig {
            target_fps: 0,
            ..EngineConfig::default()
        }
    }

    #[test]
    fn test_loop_runs_until_quit() {
        let events = ScriptedEvents::new()
            .press(1, KeyCode::Space)
            .release(3, KeyCode::Space)
            .tap(5, KeyCode::Escape);
        let mut app = Probe::default();

        Engine::run(uncapped(), Box::new(HeadlessRenderer::new(64, 64)), Box::new(events), &mut app).unwrap();

        assert!(app.initialized);
        assert!(app.cleaned_up);
        assert_eq!(app.updates, 6);
        assert_eq!(app.space_frames, 2);
    }

    #[test]
    fn test_max_frames_bounds_the_run() {
        let config = EngineConfig {
            max_frames: Some(4),
            ..uncapped()
        };
        let mut app = Probe::default();

        Engine::run(config, Box::new(HeadlessRenderer::new(64, 64)), Box::new(ScriptedEvents::new()), &mut app).unwrap();
        assert_eq!(app.updates, 4);
    }

    #[test]
    fn test_initialize_failure_aborts_before_loop() {
        let mut app = Probe {
            fail_init: true,
            ..Probe::default()
        };

        let result = Engine::run(uncapped(), Box::new(HeadlessRenderer::new(64, 64)), Box::new(ScriptedEvents::new()), &mut app);
        assert!(matches!(result, Err(EngineError::InitializationFailed(_))));
        assert_eq!(app.updates, 0);
        assert!(!app.cleaned_up);
    }

    #[test]
    fn test_close_event_stops_engine() {
        let mut engine = Engine::new(uncapped(), Box::new(HeadlessRenderer::new(8, 8)), Box::new(ScriptedEvents::new()));
        assert!(engine.is_running());
        engine.handle_event(AppEvent::WindowCloseRequested);
        assert!(!engine.is_running());
    }
}
