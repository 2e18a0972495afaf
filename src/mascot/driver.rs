//! Driver lifecycle
//!
//! [`Mascot`] is the GPU-free animation core: it owns the rig handles and
//! cursor state and mutates a [`Scene`] one step at a time. [`MascotDriver`]
//! wraps it together with the renderer, the frame timer and the external
//! playing flag into the construct / advance / recolor / dispose lifecycle.
//!
//! Concurrency model: everything here runs on the host's event-loop thread.
//! The per-frame advance is the sole mutator of scene state; the playing
//! flag is the only cross-thread value and is read atomically once per
//! advance.

use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

use crate::assets::{AssetStore, DisposeStats};
use crate::errors::Result;
use crate::renderer::{Renderer, RendererSettings};
use crate::scene::Scene;
use crate::utils::Timer;

use super::cursor::{CursorTracker, WidgetRect};
use super::profiles::{ProfileMode, RigPose};
use super::rig::{MascotRig, Theme};
use super::signal::PlayingFlag;

/// Host-facing widget configuration.
#[derive(Debug, Clone)]
pub struct MascotSettings {
    /// Logical (device-independent) edge length of the square widget.
    pub surface_size: u32,
    pub initial_theme: Theme,
    pub renderer: RendererSettings,
}

impl Default for MascotSettings {
    fn default() -> Self {
        Self {
            surface_size: 120,
            initial_theme: Theme::Dark,
            renderer: RendererSettings::default(),
        }
    }
}

/// GPU-free animation core: rig handles, cursor state, antenna phase.
///
/// All methods are synchronous and bounded; none render. The driver (or a
/// test) supplies the scene, the asset store, the playing value and the
/// elapsed time.
pub struct Mascot {
    rig: MascotRig,
    cursor: CursorTracker,
    theme: Theme,
    antenna_angle: f32,
    released: bool,
}

impl Mascot {
    /// Builds the rig into `scene`/`assets` and applies `theme`.
    pub fn build(scene: &mut Scene, assets: &mut AssetStore, rect: WidgetRect, theme: Theme) -> Self {
        let rig = MascotRig::build(scene, assets);
        if theme != Theme::Dark {
            rig.apply_theme(assets, theme);
        }
        Self {
            rig,
            cursor: CursorTracker::new(rect),
            theme,
            antenna_angle: 0.0,
            released: false,
        }
    }

    #[must_use]
    pub fn rig(&self) -> &MascotRig {
        &self.rig
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Feeds one pointer-move event (event cadence, not frame cadence).
    pub fn pointer_moved(&mut self, px: f32, py: f32) {
        self.cursor.pointer_moved(px, py);
    }

    pub fn set_rect(&mut self, rect: WidgetRect) {
        self.cursor.set_rect(rect);
    }

    /// Current damped head angles, for inspection in tests.
    #[must_use]
    pub fn head_angles(&self) -> (f32, f32) {
        (self.cursor.yaw(), self.cursor.pitch())
    }

    /// Instant palette swap.
    pub fn set_theme(&mut self, assets: &mut AssetStore, theme: Theme) {
        if self.theme != theme {
            self.theme = theme;
            self.rig.apply_theme(assets, theme);
            log::debug!("Mascot theme switched to {theme:?}");
        }
    }

    /// Advances the animation by one frame at elapsed time `t`.
    ///
    /// Samples the profile selected by `playing` (read fresh by the caller
    /// this frame), applies it to the scene nodes, steers the head with the
    /// damped cursor angles and propagates world matrices. No-op after
    /// [`release`](Mascot::release).
    pub fn step(&mut self, scene: &mut Scene, assets: &mut AssetStore, playing: bool, t: f32) {
        if self.released {
            return;
        }

        let mode = ProfileMode::from_playing(playing);
        let pose = RigPose::sample(mode, t);

        if let Some(torso) = scene.get_node_mut(self.rig.torso) {
            torso.transform.position.y = pose.torso_y;
            torso
                .transform
                .set_rotation_euler(0.0, pose.torso_yaw, pose.torso_roll);
        }

        if let Some(head) = scene.get_node_mut(self.rig.head_group) {
            head.transform.position.y = pose.head_y;
            head.transform
                .set_rotation_euler(self.cursor.pitch(), self.cursor.yaw(), pose.head_roll);
        }

        for (handle, arm_pose) in [
            (self.rig.left_arm, pose.left_arm),
            (self.rig.right_arm, pose.right_arm),
        ] {
            if let Some(arm) = scene.get_node_mut(handle) {
                arm.transform.position.y = arm_pose.y;
                arm.transform
                    .set_rotation_euler(arm_pose.tilt, 0.0, arm_pose.roll);
            }
        }

        self.antenna_angle += pose.antenna_spin_step;
        if let Some(tip) = scene.get_node_mut(self.rig.antenna_tip) {
            tip.transform.set_rotation_euler(0.0, self.antenna_angle, 0.0);
        }

        if let Some(eye) = assets.get_material_mut(self.rig.materials.eye) {
            eye.emissive_intensity = pose.eye_glow;
        }

        scene.update();
    }

    /// Tears down the scene and releases every asset exactly once.
    ///
    /// Returns how many unique geometries/materials were dropped; a second
    /// call reports zeros and further steps are no-ops.
    pub fn release(&mut self, scene: &mut Scene, assets: &mut AssetStore) -> DisposeStats {
        if self.released {
            return DisposeStats::default();
        }
        self.released = true;
        scene.clear();
        assets.release()
    }
}

/// Opaque handle to the running animation.
///
/// Owns the scene, assets, animation core and renderer. Construction is
/// the only fallible operation; on failure the caller simply does not show
/// the mascot.
pub struct MascotDriver {
    scene: Scene,
    assets: AssetStore,
    mascot: Mascot,
    renderer: Renderer,
    playing: PlayingFlag,
    timer: Timer,
    on_click: Option<Box<dyn FnMut()>>,
    disposed: bool,
}

impl MascotDriver {
    /// Builds the scene and acquires the GPU context for `window`.
    ///
    /// `surface_width`/`surface_height` are in physical pixels, already
    /// scaled by the (capped) device pixel ratio.
    pub fn new<W>(
        window: W,
        rect: WidgetRect,
        playing: PlayingFlag,
        settings: MascotSettings,
        surface_width: u32,
        surface_height: u32,
    ) -> Result<Self>
    where
        W: HasWindowHandle + HasDisplayHandle + Send + Sync + 'static,
    {
        let mut renderer = Renderer::new(settings.renderer.clone());
        pollster::block_on(renderer.init(window, surface_width, surface_height))?;

        let mut scene = Scene::new();
        let mut assets = AssetStore::new();
        let mascot = Mascot::build(&mut scene, &mut assets, rect, settings.initial_theme);

        log::info!(
            "Mascot driver constructed ({}x{} px, theme {:?})",
            surface_width,
            surface_height,
            settings.initial_theme
        );

        Ok(Self {
            scene,
            assets,
            mascot,
            renderer,
            playing,
            timer: Timer::new(),
            on_click: None,
            disposed: false,
        })
    }

    /// Registers the host callback invoked on click, forwarded verbatim.
    pub fn set_click_handler<F>(&mut self, handler: F)
    where
        F: FnMut() + 'static,
    {
        self.on_click = Some(Box::new(handler));
    }

    /// Advances one frame: reads the playing flag fresh, steps the
    /// animation and renders. No-op after [`dispose`](MascotDriver::dispose).
    pub fn advance(&mut self) {
        if self.disposed {
            return;
        }
        self.timer.tick();
        let t = self.timer.elapsed_seconds();
        let playing = self.playing.get();

        self.mascot.step(&mut self.scene, &mut self.assets, playing, t);
        self.renderer.render(&self.scene, &self.assets);
    }

    /// Forwards one pointer-move event in absolute coordinates.
    pub fn pointer_moved(&mut self, px: f32, py: f32) {
        self.mascot.pointer_moved(px, py);
    }

    /// Updates the widget's on-screen bounding box.
    pub fn set_rect(&mut self, rect: WidgetRect) {
        self.mascot.set_rect(rect);
    }

    /// Instant theme recolor.
    pub fn set_theme(&mut self, theme: Theme) {
        self.mascot.set_theme(&mut self.assets, theme);
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.mascot.theme()
    }

    /// Resizes the render surface (physical pixels) and keeps the camera
    /// aspect in step.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
        if width > 0 && height > 0 {
            self.scene.camera.set_aspect(width as f32 / height as f32);
        }
    }

    /// Forwards a click to the host without interpreting it.
    pub fn notify_click(&mut self) {
        if let Some(handler) = &mut self.on_click {
            handler();
        }
    }

    /// Releases every graphics resource exactly once and detaches the
    /// driver. Idempotent; also run from `Drop`, so teardown happens on
    /// every exit path.
    pub fn dispose(&mut self) -> DisposeStats {
        if self.disposed {
            return DisposeStats::default();
        }
        self.disposed = true;
        self.renderer.release();
        let stats = self.mascot.release(&mut self.scene, &mut self.assets);
        log::info!(
            "Mascot driver disposed ({} geometries, {} materials)",
            stats.geometries,
            stats.materials
        );
        stats
    }
}

impl Drop for MascotDriver {
    fn drop(&mut self) {
        self.dispose();
    }
}
