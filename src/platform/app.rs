//! Native window host
//!
//! Owns the game state and drives it from the winit event loop: key presses
//! go straight to `on_key`, the fixed timer pays out ticks in
//! `about_to_wait`, and every change is redrawn through the GPU batch.

use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use super::input::map_key;
use super::timer::FixedTimer;
use crate::consts::MAX_TICKS_PER_FRAME;
use crate::error::{Error, Result};
use crate::renderer::{RenderState, ShapeBatch, draw_scene};
use crate::settings::Settings;
use crate::sim::{Arena, GameEvent, GameState, on_key, tick};

pub const WINDOW_TITLE: &str = "Brick Breaker Game";

/// Window and GPU resources, created once the event loop is running
struct Graphics {
    window: Arc<Window>,
    render: RenderState,
    batch: ShapeBatch,
}

pub struct App {
    game: GameState,
    timer: FixedTimer,
    graphics: Option<Graphics>,
    /// First fatal error; the event loop exits as soon as one is recorded
    error: Option<Error>,
}

impl App {
    pub fn new(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let game = GameState::new(settings, Arena::default())?;
        let timer = FixedTimer::new(
            Duration::from_millis(settings.tick_interval_ms),
            MAX_TICKS_PER_FRAME,
            Instant::now(),
        );

        log::info!(
            "{} layout: {}x{} bricks, pause {}, tick {} ms",
            settings.layout.as_str(),
            settings.brick_rows,
            settings.brick_cols,
            if settings.pause_enabled { "on" } else { "off" },
            settings.tick_interval_ms
        );

        Ok(Self {
            game,
            timer,
            graphics: None,
            error: None,
        })
    }

    /// Consume the app after the event loop returns
    pub fn finish(self) -> Result<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn create_graphics(event_loop: &ActiveEventLoop) -> Result<Graphics> {
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_maximized(true);
        let window = Arc::new(event_loop.create_window(attributes)?);
        let size = window.inner_size();
        log::info!("Window created: {}x{}", size.width, size.height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(Arc::clone(&window))?;
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width,
            size.height,
        ))?;

        Ok(Graphics {
            window,
            render,
            batch: ShapeBatch::new(size.width, size.height),
        })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: Error) {
        log::error!("{err}");
        if self.error.is_none() {
            self.error = Some(err);
        }
        event_loop.exit();
    }

    fn request_redraw(&self) {
        if let Some(gfx) = &self.graphics {
            gfx.window.request_redraw();
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            // Minimized; keep the last real bounds
            return;
        }
        self.game.resize(width, height);
        if let Some(gfx) = &mut self.graphics {
            gfx.render.resize(width, height);
            gfx.batch.resize(width, height);
        }
        log::info!("Resized to {}x{}", width, height);
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };

        let key = map_key(code);
        // Holding an arrow keeps the paddle moving; held keys never count
        // twice toward a reset
        if event.repeat && !key.is_movement() {
            return;
        }

        if let Some(ev) = on_key(&mut self.game, key) {
            self.log_event(ev);
        }
        self.request_redraw();
    }

    fn run_due_ticks(&mut self, now: Instant) -> bool {
        let due = self.timer.update(now);
        let mut changed = false;
        for _ in 0..due {
            let before = self.game.time_ticks;
            let events = tick(&mut self.game);
            changed |= self.game.time_ticks != before || !events.is_empty();
            for ev in events {
                self.log_event(ev);
            }
        }
        changed
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gfx) = &mut self.graphics else {
            return;
        };
        if gfx.render.size.0 == 0 || gfx.render.size.1 == 0 {
            return;
        }

        gfx.batch.clear();
        draw_scene(&self.game, &mut gfx.batch);

        match gfx.render.render(&gfx.batch) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                gfx.render.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => self.fail(event_loop, Error::OutOfMemory),
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }

    fn log_event(&self, ev: GameEvent) {
        let score = self.game.score;
        match ev {
            GameEvent::WallBounce | GameEvent::CeilingBounce | GameEvent::PaddleHit => {
                log::trace!("{:?}", ev)
            }
            GameEvent::BrickDestroyed { row, col } => {
                log::debug!("Brick ({}, {}) destroyed, score {}", row, col, score)
            }
            GameEvent::BallLost => log::info!("Ball lost, final score {}", score),
            GameEvent::BoardCleared => log::info!("Board cleared, final score {}", score),
            GameEvent::Paused => log::info!("Paused"),
            GameEvent::Resumed => log::info!("Resumed"),
            GameEvent::ResetArmed => log::debug!("Reset armed, press any key"),
            GameEvent::Reset => log::info!("Game reset"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }
        match Self::create_graphics(event_loop) {
            Ok(gfx) => {
                let size = gfx.window.inner_size();
                self.graphics = Some(gfx);
                self.resize(size.width, size.height);
                self.request_redraw();
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.resize(size.width, size.height);
                self.request_redraw();
            }
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(&event),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_none() {
            return;
        }
        if self.run_due_ticks(Instant::now()) {
            self.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.timer.next_deadline()));
    }
}

/// Open the window and run the game until it is closed
pub fn run(settings: &Settings) -> Result<()> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(settings)?;
    event_loop.run_app(&mut app)?;
    app.finish()
}
