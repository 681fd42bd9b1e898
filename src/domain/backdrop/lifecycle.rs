//! Mount/unmount lifecycle of a backdrop on a [`RenderHost`].

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::debug;

use super::buffers::ParticleBuffers;
use super::config::{BackdropConfig, BackdropError};
use super::host::{ContextId, FrameHandle, ListenerId, RenderHost};
use super::scene::Scene;

/// Longest step a single frame may advance the scene, in seconds.
///
/// Hidden tabs stop delivering frames; without a cap the first frame after
/// returning would jump by the whole time spent away.
pub const MAX_FRAME_STEP: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackdropState {
    Inactive,
    Active,
}

/// Resources held while active. Dropping without [`Backdrop::deactivate`] would leak them on the host.
struct Mounted {
    scene: Scene,
    context: ContextId,
    listener: ListenerId,
    pending_frame: Option<FrameHandle>,
    last_frame_at: Option<f64>,
}

/// A decorative particle backdrop bound to a host.
///
/// Two states only: inactive (nothing held) and active (context, surface,
/// resize listener and one pending frame held). [`Backdrop::activate`] and
/// [`Backdrop::deactivate`] are the only transitions; dropping an active
/// backdrop deactivates it.
pub struct Backdrop<H: RenderHost> {
    host: H,
    config: BackdropConfig,
    seed: Option<u64>,
    mounted: Option<Mounted>,
}

impl<H: RenderHost> Backdrop<H> {
    /// # Errors
    ///
    /// Returns a [`BackdropError`] if the configuration is invalid.
    pub fn new(host: H, config: BackdropConfig) -> Result<Self, BackdropError> {
        config.validate()?;

        Ok(Self {
            host,
            config,
            seed: None,
            mounted: None,
        })
    }

    /// Uses a fixed seed for particle placement on every activation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn state(&self) -> BackdropState {
        if self.mounted.is_some() {
            BackdropState::Active
        } else {
            BackdropState::Inactive
        }
    }

    pub fn config(&self) -> &BackdropConfig {
        &self.config
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.mounted.as_ref().map(|m| &m.scene)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Allocates buffers, creates and attaches the render surface, registers
    /// the resize listener and schedules the first frame.
    ///
    /// Returns `false` without touching the host when already active or when
    /// the container is not attached yet; the caller may retry on a later cycle.
    pub fn activate(&mut self) -> bool {
        if self.mounted.is_some() {
            return false;
        }

        if !self.host.container_attached() {
            debug!("Backdrop container not attached, skipping activation");
            return false;
        }

        let buffers = match self.seed {
            Some(seed) => {
                ParticleBuffers::generate(&self.config, &mut StdRng::seed_from_u64(seed))
            }
            None => ParticleBuffers::generate(&self.config, &mut rand::rng()),
        };

        let viewport = self.host.viewport();
        let scene = Scene::new(&self.config, buffers, viewport);

        let context = self.host.create_context(viewport, self.config.blending);
        self.host.attach_surface(context);
        let listener = self.host.add_resize_listener();
        let pending_frame = Some(self.host.request_frame());

        debug!(
            particles = self.config.particle_count,
            meshes = self.config.meshes.len(),
            "Backdrop activated"
        );
        metrics::counter!("backdrop_activations_total").increment(1);

        self.mounted = Some(Mounted {
            scene,
            context,
            listener,
            pending_frame,
            last_frame_at: None,
        });

        true
    }

    /// Frame callback. `now` is a monotonic timestamp in seconds.
    ///
    /// Advances the scene by the wall-clock time since the previous frame
    /// (zero on the first frame, capped at [`MAX_FRAME_STEP`]), renders it and
    /// schedules the next frame. Does nothing while inactive.
    pub fn on_frame(&mut self, now: f64) {
        let Some(mounted) = self.mounted.as_mut() else {
            return;
        };

        if let Some(frame) = mounted.pending_frame.take() {
            self.host.cancel_frame(frame);
        }

        let dt = mounted
            .last_frame_at
            .map(|last| (now - last).clamp(0.0, MAX_FRAME_STEP))
            .unwrap_or(0.0);
        mounted.last_frame_at = Some(now);

        mounted.scene.advance(dt as f32);
        self.host.render(mounted.context, &mounted.scene);
        mounted.pending_frame = Some(self.host.request_frame());
    }

    /// Resize callback. Does nothing while inactive.
    pub fn on_resize(&mut self) {
        let Some(mounted) = self.mounted.as_mut() else {
            return;
        };

        let viewport = self.host.viewport();
        mounted.scene.resize(viewport);
        self.host.resize_context(mounted.context, viewport);
    }

    /// Cancels the pending frame, unregisters the resize listener, detaches
    /// the surface and disposes the context. Safe to call repeatedly.
    pub fn deactivate(&mut self) {
        let Some(mounted) = self.mounted.take() else {
            return;
        };

        if let Some(frame) = mounted.pending_frame {
            self.host.cancel_frame(frame);
        }
        self.host.remove_resize_listener(mounted.listener);
        self.host.detach_surface(mounted.context);
        self.host.dispose_context(mounted.context);

        debug!("Backdrop deactivated");
        metrics::counter!("backdrop_teardowns_total").increment(1);
    }
}

impl<H: RenderHost> Drop for Backdrop<H> {
    fn drop(&mut self) {
        self.deactivate();
    }
}
