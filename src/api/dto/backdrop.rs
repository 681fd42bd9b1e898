//! DTOs for the backdrop endpoint.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::application::services::GeneratedBackdrop;
use crate::domain::backdrop::{BackdropConfig, PagePreset, ParticleBuffers};

/// Query parameters for `GET /api/backdrop/{page}`.
///
/// Uses `serde_with` to parse the seed from the query string.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct BackdropQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Preset configuration plus generated buffers for the browser renderer.
#[derive(Debug, Serialize)]
pub struct BackdropResponse {
    pub page: PagePreset,
    pub config: BackdropConfig,
    pub particle_count: usize,
    pub buffers: ParticleBuffers,
}

impl From<GeneratedBackdrop> for BackdropResponse {
    fn from(generated: GeneratedBackdrop) -> Self {
        Self {
            page: generated.page,
            particle_count: generated.buffers.len(),
            config: generated.config,
            buffers: generated.buffers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_parsed_from_string() {
        let q: BackdropQuery = serde_json::from_str(r#"{"seed": "42"}"#).unwrap();
        assert_eq!(q.seed, Some(42));
    }

    #[test]
    fn test_seed_optional() {
        let q: BackdropQuery = serde_json::from_str("{}").unwrap();
        assert!(q.seed.is_none());
    }

    #[test]
    fn test_invalid_seed_is_error() {
        assert!(serde_json::from_str::<BackdropQuery>(r#"{"seed": "abc"}"#).is_err());
    }
}
