//! Backdrop presets and generated scenes for pages.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

use crate::domain::backdrop::{
    Backdrop, BackdropConfig, PagePreset, ParticleBuffers, Viewport,
};
use crate::error::AppError;
use crate::infrastructure::render::HeadlessHost;

/// A preset with freshly generated buffers, ready to ship to the browser.
#[derive(Debug, Clone)]
pub struct GeneratedBackdrop {
    pub page: PagePreset,
    pub config: BackdropConfig,
    pub buffers: ParticleBuffers,
}

/// Outcome of running a preset on a headless host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewReport {
    pub activated: bool,
    pub frames_rendered: u64,
    /// Resources still held by the host after teardown; anything but zero is a leak.
    pub leaked_resources: usize,
}

/// Resolves page presets and generates their particle buffers.
#[derive(Debug, Default)]
pub struct BackdropService;

impl BackdropService {
    pub fn new() -> Self {
        Self
    }

    /// Looks up a preset by page slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown page slugs.
    pub fn preset(&self, page: &str) -> Result<PagePreset, AppError> {
        page.parse::<PagePreset>()
            .map_err(|_| AppError::not_found("Backdrop preset not found", json!({ "page": page })))
    }

    /// Generates the buffers for a page, deterministically when `seed` is given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown page slugs.
    pub fn generate(&self, page: &str, seed: Option<u64>) -> Result<GeneratedBackdrop, AppError> {
        let preset = self.preset(page)?;
        let config = preset.config();

        let buffers = match seed {
            Some(seed) => ParticleBuffers::generate(&config, &mut StdRng::seed_from_u64(seed)),
            None => ParticleBuffers::generate(&config, &mut rand::rng()),
        };

        Ok(GeneratedBackdrop {
            page: preset,
            config,
            buffers,
        })
    }

    /// Mounts a preset on a headless host, runs `frames` frames at `fps` and unmounts it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown page slugs and
    /// [`AppError::Internal`] if the preset configuration is invalid.
    pub fn preview(
        &self,
        page: &str,
        viewport: Viewport,
        frames: u32,
        fps: f64,
    ) -> Result<PreviewReport, AppError> {
        let preset = self.preset(page)?;
        let mut host = HeadlessHost::new(viewport);

        let (activated, frames_rendered) = {
            let mut backdrop = Backdrop::new(&mut host, preset.config()).map_err(|e| {
                AppError::internal("Invalid backdrop preset", json!({ "reason": e.to_string() }))
            })?;

            let activated = backdrop.activate();
            let step = 1.0 / fps.max(1.0);
            for frame in 0..frames {
                backdrop.host_mut().fire_pending_frames();
                backdrop.on_frame(f64::from(frame) * step);
            }
            let rendered = backdrop.host().frames_rendered();
            backdrop.deactivate();
            (activated, rendered)
        };

        Ok(PreviewReport {
            activated,
            frames_rendered,
            leaked_resources: host.held_resources(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_page_is_not_found() {
        let err = BackdropService::new().generate("landing", None).unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[test]
    fn test_seeded_generation_is_stable() {
        let service = BackdropService::new();
        let a = service.generate("grc", Some(9)).unwrap();
        let b = service.generate("grc", Some(9)).unwrap();

        assert_eq!(a.buffers, b.buffers);
        assert_eq!(a.buffers.len(), a.config.particle_count);
    }

    #[test]
    fn test_preview_leaks_nothing() {
        let report = BackdropService::new()
            .preview("home", Viewport::new(1920, 1080), 30, 60.0)
            .unwrap();

        assert!(report.activated);
        assert_eq!(report.frames_rendered, 30);
        assert_eq!(report.leaked_resources, 0);
    }
}
