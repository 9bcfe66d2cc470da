//! Terrain Walk
//!
//! Run with: `cargo run --bin terrain_walk [config.json]`
//!
//! First-person walker over a procedural rolling heightfield.
//!
//! Controls:
//! - Mouse: Look around
//! - WASD: Move
//! - Space: Jump
//! - Shift: Sprint
//! - Shift + Ctrl while running: Slide
//! - F1: Toggle wireframe
//! - ESC: Exit

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode as WinitKey, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowAttributes, WindowId};

use terrain_walk_engine::camera::Projection;
use terrain_walk_engine::config::DemoConfig;
use terrain_walk_engine::frame::{FrameClock, FrameDriver};
use terrain_walk_engine::input::{InputSampler, KeyCode};
use terrain_walk_engine::render::{GpuContext, GpuContextConfig, RenderError, TerrainRenderer};

// ============================================================================
// INPUT MAPPING
// ============================================================================

fn map_key(key: WinitKey) -> KeyCode {
    match key {
        WinitKey::KeyW => KeyCode::W,
        WinitKey::KeyA => KeyCode::A,
        WinitKey::KeyS => KeyCode::S,
        WinitKey::KeyD => KeyCode::D,
        WinitKey::Space => KeyCode::Space,
        WinitKey::ShiftLeft => KeyCode::ShiftLeft,
        WinitKey::ShiftRight => KeyCode::ShiftRight,
        WinitKey::ControlLeft => KeyCode::ControlLeft,
        WinitKey::ControlRight => KeyCode::ControlRight,
        WinitKey::F1 => KeyCode::F1,
        WinitKey::Escape => KeyCode::Escape,
        _ => KeyCode::Unknown,
    }
}

/// Hide and grab the cursor. Falls back to `Confined` where `Locked` is unsupported.
fn capture_cursor(window: &Window) {
    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Locked)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
    if let Err(e) = grabbed {
        log::warn!("cursor grab unavailable: {e}");
    }
    window.set_cursor_visible(false);
}

fn release_cursor(window: &Window) {
    let _ = window.set_cursor_grab(CursorGrabMode::None);
    window.set_cursor_visible(true);
}

// ============================================================================
// APP STATE
// ============================================================================

struct AppState {
    window: Arc<Window>,
    gpu: GpuContext,
    renderer: TerrainRenderer,
    driver: FrameDriver,
    input: InputSampler,
    clock: FrameClock,
}

impl AppState {
    fn new(window: Arc<Window>, config: &DemoConfig) -> Result<Self, RenderError> {
        let gpu = GpuContext::new(Arc::clone(&window), GpuContextConfig::from(&config.window))?;
        let driver = FrameDriver::new(config);
        let renderer = TerrainRenderer::new(
            &gpu,
            driver.terrain(),
            Projection::from_config(&config.camera),
        );

        let mut input = InputSampler::new();
        capture_cursor(&window);
        input.set_cursor_captured(true);

        Ok(Self {
            window,
            gpu,
            renderer,
            driver,
            input,
            clock: FrameClock::new(config.frame.max_dt),
        })
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.gpu.resize(size.width, size.height);
    }

    fn set_focused(&mut self, focused: bool) {
        if focused {
            capture_cursor(&self.window);
        } else {
            self.input.release_all();
            release_cursor(&self.window);
        }
        self.input.set_cursor_captured(focused);
        self.clock.reset();
    }

    /// One simulation tick followed by one draw.
    fn frame(&mut self) -> Result<(), wgpu::SurfaceError> {
        let dt = self.clock.tick();
        let snapshot = self.input.consume();
        let output = self.driver.advance(&snapshot, dt);
        self.renderer
            .render(&self.gpu, &output.camera, output.wireframe)
    }
}

// ============================================================================
// APPLICATION HANDLER
// ============================================================================

struct App {
    config: DemoConfig,
    state: Option<AppState>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let window_attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(PhysicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        match AppState::new(window, &self.config) {
            Ok(state) => {
                state.window.request_redraw();
                self.state = Some(state);
            }
            Err(e) => {
                log::error!("GPU initialization failed: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                state.resize(new_size);
            }
            WindowEvent::Focused(focused) => {
                state.set_focused(focused);
            }
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                let pressed = key_state == ElementState::Pressed;
                let key = map_key(key);

                if key == KeyCode::Escape && pressed {
                    event_loop.exit();
                    return;
                }

                state.input.handle_key(key, pressed);
            }
            WindowEvent::RedrawRequested => {
                match state.frame() {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        state.gpu.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("surface out of memory");
                        event_loop.exit();
                    }
                    Err(e) => log::warn!("render error: {e:?}"),
                }

                state.window.request_redraw();
            }
            _ => {}
        }
    }

    fn device_event(&mut self, _: &ActiveEventLoop, _: DeviceId, event: DeviceEvent) {
        let Some(state) = &mut self.state else {
            return;
        };
        if let DeviceEvent::MouseMotion { delta } = event {
            state.input.mouse_motion(delta.0, delta.1);
        }
    }
}

// ============================================================================
// MAIN
// ============================================================================

/// Config from the first CLI argument, or defaults when absent or unreadable.
fn load_config() -> DemoConfig {
    let Some(path) = std::env::args().nth(1) else {
        return DemoConfig::default();
    };

    match DemoConfig::load(Path::new(&path)) {
        Ok(config) => {
            log::info!("loaded config from {path}");
            config
        }
        Err(e) => {
            log::warn!("could not load config {path}: {e}; using defaults");
            DemoConfig::default()
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App {
        config,
        state: None,
    };
    event_loop.run_app(&mut app)?;

    Ok(())
}
