//! Headless backend
//!
//! A renderer that records draw commands instead of rasterizing them, and an
//! event source that replays a frame-indexed script. Used for automated runs
//! and tests where no window is available.

use std::collections::BTreeMap;

use crate::application::AppEvent;
use crate::assets::ImageHandle;
use crate::events::EventSource;
use crate::foundation::math::Vec2;
use crate::input::KeyCode;
use crate::render::{Color, DrawCommand, RenderError, Renderer};

/// Renderer that keeps the draw commands of the last presented frame
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    width: u32,
    height: u32,
    pending: Vec<DrawCommand>,
    last_frame: Vec<DrawCommand>,
    frames_presented: u64,
}

impl HeadlessRenderer {
    /// Create a renderer for a `width` x `height` surface
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Commands of the most recently presented frame
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    /// Commands recorded since the last `present`
    pub fn pending(&self) -> &[DrawCommand] {
        &self.pending
    }

    /// Number of frames presented
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Text draws of the pending frame, in draw order
    pub fn pending_text(&self) -> Vec<&str> {
        self.pending.iter().filter_map(DrawCommand::as_text).collect()
    }
}

impl Renderer for HeadlessRenderer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) {
        self.pending.clear();
        self.pending.push(DrawCommand::Clear(color));
    }

    fn draw_sprite(&mut self, image: ImageHandle, center: Vec2, rotation_degrees: f32, extent: f32) {
        self.pending.push(DrawCommand::Sprite {
            image,
            center,
            rotation_degrees,
            extent,
        });
    }

    fn draw_text(&mut self, text: &str, position: Vec2, color: Color) {
        self.pending.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            color,
        });
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.frames_presented += 1;
        log::trace!(
            "Frame {} presented with {} draw commands",
            self.frames_presented,
            self.pending.len()
        );
        self.last_frame = std::mem::take(&mut self.pending);
        Ok(())
    }
}

/// Event source that replays a fixed timeline
#[derive(Debug, Default, Clone)]
pub struct ScriptedEvents {
    timeline: BTreeMap<u64, Vec<AppEvent>>,
}

impl ScriptedEvents {
    /// Empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` at `frame`
    pub fn at(mut self, frame: u64, event: AppEvent) -> Self {
        self.timeline.entry(frame).or_default().push(event);
        self
    }

    /// Key goes down at `frame`
    pub fn press(self, frame: u64, key: KeyCode) -> Self {
        self.at(frame, AppEvent::KeyInput { key, pressed: true })
    }

    /// Key goes up at `frame`
    pub fn release(self, frame: u64, key: KeyCode) -> Self {
        self.at(frame, AppEvent::KeyInput { key, pressed: false })
    }

    /// Key down at `frame`, up on the next frame
    pub fn tap(self, frame: u64, key: KeyCode) -> Self {
        self.press(frame, key).release(frame + 1, key)
    }

    /// Key held from `from` until `until` (exclusive)
    pub fn hold(self, from: u64, until: u64, key: KeyCode) -> Self {
        self.press(from, key).release(until, key)
    }

    /// Type `text` one character per frame starting at `frame`
    pub fn type_text(self, frame: u64, text: &str) -> Self {
        text.chars()
            .zip(frame..)
            .fold(self, |script, (c, at)| script.at(at, AppEvent::CharTyped(c)))
    }

    /// Request shutdown at `frame`
    pub fn close_at(self, frame: u64) -> Self {
        self.at(frame, AppEvent::WindowCloseRequested)
    }

    /// Last frame with a scripted event
    pub fn last_frame(&self) -> Option<u64> {
        self.timeline.keys().next_back().copied()
    }
}

impl EventSource for ScriptedEvents {
    fn poll_events(&mut self, frame: u64) -> Vec<AppEvent> {
        self.timeline.remove(&frame).unwrap_or_default()
    }
}
