//! Flat particle buffers in GPU-friendly layout.

use rand::Rng;
use serde::Serialize;

use super::config::BackdropConfig;

/// Position, color and optional size buffers for `k` particles.
///
/// `positions` and `colors` have stride 3, `sizes` has stride 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleBuffers {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<f32>>,
}

impl ParticleBuffers {
    /// Scatters `config.particle_count` points uniformly inside the config's cube.
    ///
    /// Colors come from one uniform draw per particle against the palette's
    /// cumulative weights. Sizes are produced only when `size_variation` is set.
    pub fn generate<R: Rng + ?Sized>(config: &BackdropConfig, rng: &mut R) -> Self {
        let count = config.particle_count;
        let spread = config.spread;

        let mut positions = Vec::with_capacity(count * 3);
        let mut colors = Vec::with_capacity(count * 3);
        let mut sizes = config.size_variation.map(|_| Vec::with_capacity(count));

        for _ in 0..count {
            for _ in 0..3 {
                positions.push((rng.random::<f32>() - 0.5) * spread);
            }

            let color = config.palette.pick(rng.random::<f32>());
            colors.extend_from_slice(&[color.r, color.g, color.b]);

            if let (Some(sizes), Some(variation)) = (sizes.as_mut(), config.size_variation) {
                let jitter = rng.random::<f32>() * 2.0 - 1.0;
                sizes.push(config.point_size * (1.0 + variation * jitter));
            }
        }

        Self {
            positions,
            colors,
            sizes,
        }
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn position(&self, index: usize) -> Option<[f32; 3]> {
        let i = index * 3;
        self.positions
            .get(i..i + 3)
            .map(|p| [p[0], p[1], p[2]])
    }

    /// Largest absolute coordinate across all particles.
    pub fn max_abs_coordinate(&self) -> f32 {
        self.positions.iter().fold(0.0_f32, |acc, v| acc.max(v.abs()))
    }

    /// Size in bytes of all buffers as they would be uploaded.
    pub fn byte_len(&self) -> usize {
        let floats =
            self.positions.len() + self.colors.len() + self.sizes.as_ref().map_or(0, Vec::len);
        floats * std::mem::size_of::<f32>()
    }
}
