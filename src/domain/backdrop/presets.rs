//! Per-page backdrop looks.
//!
//! Every page shares the same engine and differs only in the numbers below.

use serde::Serialize;
use std::str::FromStr;

use super::config::{
    BackdropConfig, Blending, MeshDescriptor, MeshKind, Motion, Palette, Rgb, WHITE,
};

/// Page a backdrop preset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PagePreset {
    Home,
    About,
    ApplicationSecurity,
    Bcms,
    CloudSecurity,
    Grc,
    MobileSecurity,
    Tprm,
    News,
    Contact,
    Service,
}

impl PagePreset {
    pub const ALL: [PagePreset; 11] = [
        PagePreset::Home,
        PagePreset::About,
        PagePreset::ApplicationSecurity,
        PagePreset::Bcms,
        PagePreset::CloudSecurity,
        PagePreset::Grc,
        PagePreset::MobileSecurity,
        PagePreset::Tprm,
        PagePreset::News,
        PagePreset::Contact,
        PagePreset::Service,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            PagePreset::Home => "home",
            PagePreset::About => "about",
            PagePreset::ApplicationSecurity => "application-security",
            PagePreset::Bcms => "bcms",
            PagePreset::CloudSecurity => "cloud-security",
            PagePreset::Grc => "grc",
            PagePreset::MobileSecurity => "mobile-security",
            PagePreset::Tprm => "tprm",
            PagePreset::News => "news",
            PagePreset::Contact => "contact",
            PagePreset::Service => "service",
        }
    }

    /// Preset for a service category slug; unknown categories share the generic look.
    pub fn for_category(slug: &str) -> Self {
        match slug {
            "application-security" | "cloud-security" | "grc" | "mobile-security" | "tprm"
            | "bcms" => slug.parse().unwrap_or(PagePreset::Service),
            _ => PagePreset::Service,
        }
    }

    pub fn config(&self) -> BackdropConfig {
        match self {
            PagePreset::Home => BackdropConfig::new(2_000, 200.0)
                .with_point_size(1.2, Some(0.4))
                .with_opacity(0.8, Blending::Additive)
                .with_meshes(vec![
                    MeshDescriptor::new(MeshKind::Icosahedron, 12.0, [-30.0, 10.0, -20.0], 0x00ffff),
                    MeshDescriptor::new(MeshKind::Octahedron, 8.0, [28.0, -12.0, -10.0], 0x0066ff)
                        .with_spin([0.2, 0.4, 0.1]),
                ])
                .with_motion(Motion {
                    rotation: [0.0, 0.05, 0.0],
                    pulse_amplitude: 0.2,
                    frequency: 1.5,
                    ..Motion::default()
                }),
            PagePreset::About => BackdropConfig::new(1_500, 200.0)
                .with_opacity(0.7, Blending::Normal)
                .with_meshes(vec![
                    MeshDescriptor::new(MeshKind::TorusKnot, 10.0, [25.0, 0.0, -30.0], 0x3b82f6)
                        .with_opacity(0.2),
                ])
                .with_motion(Motion {
                    rotation: [0.01, 0.03, 0.0],
                    ..Motion::default()
                }),
            PagePreset::ApplicationSecurity => BackdropConfig::new(1_200, 180.0)
                .with_palette(palette(&[(0x22d3ee, 0.5), (0x6366f1, 0.3), (0xffffff, 0.2)]))
                .with_point_size(1.4, None)
                .with_opacity(0.75, Blending::Additive)
                .with_meshes(vec![
                    MeshDescriptor::new(MeshKind::Box, 9.0, [-25.0, 15.0, -15.0], 0x6366f1),
                    MeshDescriptor::new(MeshKind::Tetrahedron, 7.0, [30.0, -10.0, -25.0], 0x22d3ee),
                ]),
            PagePreset::Bcms => BackdropConfig::new(1_000, 220.0)
                .with_palette(palette(&[(0x10b981, 0.5), (0x0ea5e9, 0.3), (0xffffff, 0.2)]))
                .with_motion(Motion {
                    rotation: [0.0, 0.02, 0.01],
                    float_amplitude: 1.5,
                    frequency: 0.8,
                    ..Motion::default()
                }),
            PagePreset::CloudSecurity => BackdropConfig::new(1_800, 250.0)
                .with_palette(palette(&[(0x38bdf8, 0.6), (0xe0f2fe, 0.4)]))
                .with_point_size(1.6, Some(0.5))
                .with_opacity(0.6, Blending::Normal)
                .with_motion(Motion {
                    rotation: [0.0, 0.015, 0.0],
                    float_amplitude: 2.0,
                    frequency: 0.5,
                    ..Motion::default()
                }),
            PagePreset::Grc => BackdropConfig::new(1_200, 200.0)
                .with_palette(palette(&[(0xf59e0b, 0.3), (0x3b82f6, 0.4), (0xffffff, 0.3)]))
                .with_meshes(vec![
                    MeshDescriptor::new(MeshKind::Octahedron, 10.0, [-28.0, -8.0, -20.0], 0xf59e0b)
                        .with_opacity(0.25),
                ]),
            PagePreset::MobileSecurity => BackdropConfig::new(900, 160.0)
                .with_palette(palette(&[(0xa855f7, 0.4), (0x06b6d4, 0.4), (0xffffff, 0.2)]))
                .with_point_size(1.3, Some(0.3))
                .with_opacity(0.8, Blending::Additive)
                .with_motion(Motion {
                    rotation: [0.02, 0.04, 0.0],
                    pulse_amplitude: 0.3,
                    frequency: 2.0,
                    ..Motion::default()
                }),
            PagePreset::Tprm => BackdropConfig::new(1_100, 200.0)
                .with_palette(palette(&[(0x14b8a6, 0.4), (0x0066ff, 0.3), (0xffffff, 0.3)]))
                .with_meshes(vec![
                    MeshDescriptor::new(MeshKind::Torus, 11.0, [26.0, 12.0, -22.0], 0x14b8a6)
                        .with_spin([0.4, 0.2, 0.0]),
                ]),
            PagePreset::News => BackdropConfig::new(800, 180.0)
                .with_opacity(0.5, Blending::Normal)
                .with_motion(Motion {
                    rotation: [0.0, 0.02, 0.0],
                    ..Motion::default()
                }),
            PagePreset::Contact => BackdropConfig::new(600, 150.0)
                .with_palette(Palette::solid(WHITE))
                .with_opacity(0.4, Blending::Normal)
                .with_camera_distance(40.0),
            PagePreset::Service => BackdropConfig::new(1_000, 200.0),
        }
    }
}

impl FromStr for PagePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PagePreset::ALL
            .into_iter()
            .find(|p| p.slug() == s)
            .ok_or_else(|| format!("unknown backdrop preset: {s}"))
    }
}

/// Builds a preset palette; preset weights are literals known to be valid.
fn palette(pairs: &[(u32, f32)]) -> Palette {
    Palette::weighted(pairs).unwrap_or_else(|_| {
        Palette::solid(Rgb::from_hex(pairs.first().map_or(0xffffff, |p| p.0)))
    })
}
