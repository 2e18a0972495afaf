//! Host harness
//!
//! Thin winit shell that owns the window and drives [`MascotDriver`] with
//! the cooperative tick loop: each `RedrawRequested` advances one frame and
//! re-arms the next redraw, so the advance step stays the single writer of
//! scene state on the event-loop thread.
//!
//! Host bindings: Space toggles the playing flag, `T` toggles the theme,
//! a left click is forwarded to the driver's click handler.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::errors::Result;
use crate::mascot::{MascotDriver, MascotSettings, PlayingFlag, WidgetRect};

pub struct MascotApp {
    settings: MascotSettings,
    playing: PlayingFlag,

    window: Option<Arc<Window>>,
    driver: Option<MascotDriver>,
}

impl MascotApp {
    #[must_use]
    pub fn new(settings: MascotSettings) -> Self {
        Self {
            settings,
            playing: PlayingFlag::new(false),
            window: None,
            driver: None,
        }
    }

    /// Handle to the playing flag, for an external audio-player host.
    #[must_use]
    pub fn playing_flag(&self) -> PlayingFlag {
        self.playing.clone()
    }

    pub fn run(mut self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)?;
        Ok(())
    }

    /// Surface size honoring the pixel-ratio cap.
    fn capped_surface_size(&self, physical: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
        let cap = (self.settings.surface_size as f32 * self.settings.renderer.max_pixel_ratio)
            .round() as u32;
        (physical.width.min(cap), physical.height.min(cap))
    }
}

impl ApplicationHandler for MascotApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let size = f64::from(self.settings.surface_size);
        let attributes = Window::default_attributes()
            .with_title("Mascot")
            .with_inner_size(winit::dpi::LogicalSize::new(size, size))
            .with_resizable(false);

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        let physical = window.inner_size();
        let (width, height) = self.capped_surface_size(physical);
        let rect = WidgetRect::new(0.0, 0.0, physical.width as f32, physical.height as f32);

        match MascotDriver::new(
            window.clone(),
            rect,
            self.playing.clone(),
            self.settings.clone(),
            width,
            height,
        ) {
            Ok(mut driver) => {
                driver.set_click_handler(|| log::info!("Mascot clicked"));
                self.driver = Some(driver);
            }
            Err(e) => {
                // Fatal to the widget only: degrade to "no mascot".
                log::error!("Mascot construction failed: {e}");
                event_loop.exit();
            }
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
                // Dropping the driver runs teardown.
                self.driver = None;
                event_loop.exit();
            }
            WindowEvent::Resized(physical) => {
                let (width, height) = self.capped_surface_size(physical);
                if let Some(driver) = &mut self.driver {
                    driver.resize(width, height);
                    driver.set_rect(WidgetRect::new(
                        0.0,
                        0.0,
                        physical.width as f32,
                        physical.height as f32,
                    ));
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(driver) = &mut self.driver {
                    driver.advance();
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(driver) = &mut self.driver {
                    driver.pointer_moved(position.x as f32, position.y as f32);
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if let Some(driver) = &mut self.driver {
                    driver.notify_click();
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    match event.physical_key {
                        PhysicalKey::Code(KeyCode::Space) => {
                            let playing = self.playing.toggle();
                            log::info!("Playing: {playing}");
                        }
                        PhysicalKey::Code(KeyCode::KeyT) => {
                            if let Some(driver) = &mut self.driver {
                                driver.set_theme(driver.theme().toggled());
                            }
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl Default for MascotApp {
    fn default() -> Self {
        Self::new(MascotSettings::default())
    }
}
