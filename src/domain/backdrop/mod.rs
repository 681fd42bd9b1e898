//! Ambient particle backdrop.
//!
//! A decorative point cloud (optionally with a few wireframe solids) drawn
//! behind page content. One configurable engine replaces the per-page copies:
//!
//! - [`config`] - Count, spread, palette, meshes and motion
//! - [`buffers`] - Flat position/color/size buffers
//! - [`scene`] - Camera and wall-clock driven animation state
//! - [`host`] - The environment a backdrop renders into
//! - [`lifecycle`] - Activation, frame/resize callbacks and teardown
//! - [`presets`] - Per-page looks

pub mod buffers;
pub mod config;
pub mod host;
pub mod lifecycle;
pub mod presets;
pub mod scene;

pub use buffers::ParticleBuffers;
pub use config::{
    BackdropConfig, BackdropError, Blending, MeshDescriptor, MeshKind, Motion, Palette,
    PaletteEntry, Rgb,
};
pub use host::{ContextId, FrameHandle, ListenerId, RenderHost};
pub use lifecycle::{Backdrop, BackdropState, MAX_FRAME_STEP};
pub use presets::PagePreset;
pub use scene::{Camera, MeshInstance, Scene, Viewport};
