//! Scene state advanced by wall-clock time.

use serde::Serialize;
use std::f32::consts::TAU;

use super::buffers::ParticleBuffers;
use super::config::{BackdropConfig, MeshDescriptor};

/// Visible area of the host, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height; a zero height is treated as one pixel.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// Perspective camera looking down the negative z axis at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Camera {
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub z: f32,
}

impl Camera {
    pub fn new(distance: f32, viewport: Viewport) -> Self {
        Self {
            fov_degrees: 75.0,
            aspect: viewport.aspect(),
            near: 0.1,
            far: 1000.0,
            z: distance,
        }
    }
}

/// A decorative mesh with its accumulated rotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshInstance {
    pub descriptor: MeshDescriptor,
    pub rotation: [f32; 3],
}

/// Live state of one backdrop: camera, buffers and rotations.
///
/// The base buffers are kept untouched; floating and pulsing write into the
/// live copy as offsets from the base, so long sessions never drift.
#[derive(Debug, Clone)]
pub struct Scene {
    motion: super::config::Motion,
    camera: Camera,
    base: ParticleBuffers,
    live: ParticleBuffers,
    rotation: [f32; 3],
    meshes: Vec<MeshInstance>,
    elapsed: f32,
}

impl Scene {
    pub fn new(config: &BackdropConfig, buffers: ParticleBuffers, viewport: Viewport) -> Self {
        let meshes = config
            .meshes
            .iter()
            .cloned()
            .map(|descriptor| MeshInstance {
                descriptor,
                rotation: [0.0; 3],
            })
            .collect();

        Self {
            motion: config.motion,
            camera: Camera::new(config.camera_distance, viewport),
            live: buffers.clone(),
            base: buffers,
            rotation: [0.0; 3],
            meshes,
            elapsed: 0.0,
        }
    }

    /// Advances the scene by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }

        self.elapsed += dt;
        spin(&mut self.rotation, self.motion.rotation, dt);

        for mesh in &mut self.meshes {
            spin(&mut mesh.rotation, mesh.descriptor.spin, dt);
        }

        let phase = self.elapsed * self.motion.frequency;

        if self.motion.float_amplitude > 0.0 {
            let amplitude = self.motion.float_amplitude;
            for (live, base) in self
                .live
                .positions
                .chunks_exact_mut(3)
                .zip(self.base.positions.chunks_exact(3))
            {
                live[1] = base[1] + amplitude * (phase + base[0]).sin();
            }
        }

        if self.motion.pulse_amplitude > 0.0
            && let (Some(live), Some(base)) = (self.live.sizes.as_mut(), self.base.sizes.as_ref())
        {
            let amplitude = self.motion.pulse_amplitude;
            for (i, (live, base)) in live.iter_mut().zip(base).enumerate() {
                *live = base * (1.0 + amplitude * (phase + i as f32).sin());
            }
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.camera.aspect = viewport.aspect();
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Buffers as they should be drawn this frame.
    pub fn buffers(&self) -> &ParticleBuffers {
        &self.live
    }

    /// Buffers as originally generated.
    pub fn base_buffers(&self) -> &ParticleBuffers {
        &self.base
    }

    pub fn rotation(&self) -> [f32; 3] {
        self.rotation
    }

    pub fn meshes(&self) -> &[MeshInstance] {
        &self.meshes
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

fn spin(rotation: &mut [f32; 3], rate: [f32; 3], dt: f32) {
    for (angle, rate) in rotation.iter_mut().zip(rate) {
        *angle = (*angle + rate * dt).rem_euclid(TAU);
    }
}
