//! Backdrop configuration: particle count, spread, palette, meshes and motion.

use serde::Serialize;

/// Errors raised when a backdrop configuration cannot be used.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BackdropError {
    #[error("palette must contain at least one entry")]
    EmptyPalette,

    #[error("palette weights must be finite, non-negative and not all zero")]
    InvalidWeights,

    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must be within [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f32 },
}

/// Linear RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Builds a color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    pub fn to_hex(self) -> String {
        let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", c(self.r), c(self.g), c(self.b))
    }
}

pub const CYAN: Rgb = Rgb::from_hex(0x00ffff);
pub const BLUE: Rgb = Rgb::from_hex(0x0066ff);
pub const WHITE: Rgb = Rgb::from_hex(0xffffff);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaletteEntry {
    pub color: Rgb,
    pub weight: f32,
}

/// Weighted color palette sampled with one uniform draw per particle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// # Errors
    ///
    /// Returns [`BackdropError::EmptyPalette`] for an empty list and
    /// [`BackdropError::InvalidWeights`] for negative, non-finite or all-zero weights.
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self, BackdropError> {
        if entries.is_empty() {
            return Err(BackdropError::EmptyPalette);
        }

        if entries
            .iter()
            .any(|e| !e.weight.is_finite() || e.weight < 0.0)
        {
            return Err(BackdropError::InvalidWeights);
        }

        if entries.iter().map(|e| e.weight).sum::<f32>() <= 0.0 {
            return Err(BackdropError::InvalidWeights);
        }

        Ok(Self { entries })
    }

    /// Palette from `(hex, weight)` pairs.
    pub fn weighted(pairs: &[(u32, f32)]) -> Result<Self, BackdropError> {
        Self::new(
            pairs
                .iter()
                .map(|&(hex, weight)| PaletteEntry {
                    color: Rgb::from_hex(hex),
                    weight,
                })
                .collect(),
        )
    }

    /// Single-color palette.
    pub fn solid(color: Rgb) -> Self {
        Self {
            entries: vec![PaletteEntry { color, weight: 1.0 }],
        }
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Selects the color whose cumulative weight band contains `draw`.
    ///
    /// `draw` is expected in `[0, 1)`; values at or above 1 map to the last entry.
    pub fn pick(&self, draw: f32) -> Rgb {
        let total: f32 = self.entries.iter().map(|e| e.weight).sum();
        let mut threshold = 0.0;

        for entry in &self.entries {
            threshold += entry.weight / total;
            if draw < threshold {
                return entry.color;
            }
        }

        self.entries[self.entries.len() - 1].color
    }
}

impl Default for Palette {
    /// 40% cyan, 30% blue, 30% white.
    fn default() -> Self {
        Self {
            entries: vec![
                PaletteEntry {
                    color: CYAN,
                    weight: 0.4,
                },
                PaletteEntry {
                    color: BLUE,
                    weight: 0.3,
                },
                PaletteEntry {
                    color: WHITE,
                    weight: 0.3,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Blending {
    #[default]
    Normal,
    Additive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MeshKind {
    Icosahedron,
    Octahedron,
    Tetrahedron,
    Torus,
    TorusKnot,
    Box,
}

/// A decorative wireframe solid floating in the scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshDescriptor {
    pub kind: MeshKind,
    pub size: f32,
    pub position: [f32; 3],
    pub wireframe_color: Rgb,
    pub opacity: f32,
    /// Angular velocity around x/y/z in radians per second.
    pub spin: [f32; 3],
}

impl MeshDescriptor {
    pub fn new(kind: MeshKind, size: f32, position: [f32; 3], color: u32) -> Self {
        Self {
            kind,
            size,
            position,
            wireframe_color: Rgb::from_hex(color),
            opacity: 0.3,
            spin: [0.3, 0.6, 0.0],
        }
    }

    pub fn with_spin(mut self, spin: [f32; 3]) -> Self {
        self.spin = spin;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Time-based motion parameters. All rates are per second of wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Motion {
    /// Point cloud angular velocity around x/y/z in radians per second.
    pub rotation: [f32; 3],
    /// Amplitude of the vertical sinusoidal float, 0 disables.
    pub float_amplitude: f32,
    /// Relative amplitude of the size pulse, 0 disables.
    pub pulse_amplitude: f32,
    /// Angular frequency shared by float and pulse.
    pub frequency: f32,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            rotation: [0.0, 0.03, 0.0],
            float_amplitude: 0.0,
            pulse_amplitude: 0.0,
            frequency: 1.0,
        }
    }
}

/// Everything needed to build one ambient backdrop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackdropConfig {
    pub particle_count: usize,
    /// Edge length of the cube particles are scattered in, centred on the origin.
    pub spread: f32,
    pub palette: Palette,
    pub point_size: f32,
    /// Relative per-point size variation; enables the size buffer when set.
    pub size_variation: Option<f32>,
    pub opacity: f32,
    pub blending: Blending,
    pub meshes: Vec<MeshDescriptor>,
    pub camera_distance: f32,
    pub motion: Motion,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            particle_count: 1_500,
            spread: 200.0,
            palette: Palette::default(),
            point_size: 1.5,
            size_variation: None,
            opacity: 0.8,
            blending: Blending::Normal,
            meshes: Vec::new(),
            camera_distance: 50.0,
            motion: Motion::default(),
        }
    }
}

impl BackdropConfig {
    pub fn new(particle_count: usize, spread: f32) -> Self {
        Self {
            particle_count,
            spread,
            ..Self::default()
        }
    }

    /// Half the cube edge: every generated coordinate lies in `[-half_extent, half_extent]`.
    pub fn half_extent(&self) -> f32 {
        self.spread / 2.0
    }

    /// # Errors
    ///
    /// Returns the first [`BackdropError`] found among spread, point size,
    /// camera distance, opacity, size variation and mesh parameters.
    pub fn validate(&self) -> Result<(), BackdropError> {
        positive("spread", self.spread)?;
        positive("point_size", self.point_size)?;
        positive("camera_distance", self.camera_distance)?;
        unit("opacity", self.opacity)?;

        if let Some(variation) = self.size_variation {
            unit("size_variation", variation)?;
        }

        for mesh in &self.meshes {
            positive("mesh.size", mesh.size)?;
            unit("mesh.opacity", mesh.opacity)?;
        }

        Ok(())
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_point_size(mut self, size: f32, variation: Option<f32>) -> Self {
        self.point_size = size;
        self.size_variation = variation;
        self
    }

    pub fn with_opacity(mut self, opacity: f32, blending: Blending) -> Self {
        self.opacity = opacity;
        self.blending = blending;
        self
    }

    pub fn with_meshes(mut self, meshes: Vec<MeshDescriptor>) -> Self {
        self.meshes = meshes;
        self
    }

    pub fn with_camera_distance(mut self, distance: f32) -> Self {
        self.camera_distance = distance;
        self
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = motion;
        self
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), BackdropError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BackdropError::NonPositive { field, value })
    }
}

fn unit(field: &'static str, value: f32) -> Result<(), BackdropError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(BackdropError::OutOfUnitRange { field, value })
    }
}
