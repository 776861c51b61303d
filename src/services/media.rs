// Media Placeholder Assessment
// File-size-derived trust scores for audio/video. This is an explicitly
// labeled placeholder contract, NOT inference: no frames are decoded and no
// model runs. The legacy path faked plausibility with random noise; here the
// only modes are the deterministic size heuristic or a caller-supplied
// constant.

use crate::models::{MediaKind, MediaVerdict};
use std::io;
use std::path::Path;
use std::time::Instant;
use tracing::info;

const SIZE_MODEL_TAG: &str = "heuristic-size-v1 (placeholder)";
const FIXED_MODEL_TAG: &str = "fixed (placeholder)";

/// How the placeholder produces its trust score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrustMode {
    /// Deterministic function of file size, per media kind.
    FileSize,
    /// A caller-supplied constant, clamped to [0, 1]. Useful for tests and
    /// for integrations that want a controlled stand-in value.
    Fixed(f64),
}

pub struct MediaAssessor {
    mode: TrustMode,
}

impl Default for MediaAssessor {
    fn default() -> Self {
        Self::new(TrustMode::FileSize)
    }
}

impl MediaAssessor {
    pub fn new(mode: TrustMode) -> Self {
        Self { mode }
    }

    /// Assess a media file. Only I/O failures (missing file, unreadable
    /// metadata) are surfaced as errors; callers wanting the legacy error
    /// verdict shape can use [`MediaVerdict::from_error`].
    pub fn assess(&self, path: &Path, kind: MediaKind) -> io::Result<MediaVerdict> {
        let started = Instant::now();

        let (trust, model) = match self.mode {
            TrustMode::Fixed(value) => (value.clamp(0.0, 1.0), FIXED_MODEL_TAG),
            TrustMode::FileSize => {
                let size = std::fs::metadata(path)?.len();
                (size_trust_score(size, kind), SIZE_MODEL_TAG)
            }
        };

        info!(path = %path.display(), kind = kind.as_str(), trust, "media placeholder assessment");

        Ok(MediaVerdict {
            trust_score: trust,
            suspicious: trust < 0.5,
            media_type: kind.as_str().to_string(),
            confidence: (trust - 0.5).abs() * 2.0,
            processing_time_ms: started.elapsed().as_secs_f64() * 1000.0,
            model: model.to_string(),
            error: None,
        })
    }
}

/// The legacy size heuristics, kept bit-for-bit: larger files score as more
/// trustworthy up to a cap.
fn size_trust_score(size_bytes: u64, kind: MediaKind) -> f64 {
    let size = size_bytes as f64;
    match kind {
        MediaKind::Video => (size / 500_000.0).min(0.8) + 0.1,
        MediaKind::Audio => (size / 100_000.0).min(0.7) * 0.5 + 0.3,
    }
}

impl MediaVerdict {
    /// Neutral error verdict matching the legacy wire contract. Takes the raw
    /// media-type string so unknown types can be echoed back.
    pub fn from_error(media_type: &str, elapsed_ms: f64, detail: String) -> Self {
        Self {
            trust_score: 0.5,
            suspicious: false,
            media_type: media_type.to_string(),
            confidence: 0.0,
            processing_time_ms: elapsed_ms,
            model: "Error".to_string(),
            error: Some(detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_size_formula() {
        // 250 KB video: 0.5 + 0.1
        assert!((size_trust_score(250_000, MediaKind::Video) - 0.6).abs() < 1e-9);
        // Very large video saturates at 0.9.
        assert!((size_trust_score(10_000_000, MediaKind::Video) - 0.9).abs() < 1e-9);
        // Empty file bottoms out at 0.1.
        assert!((size_trust_score(0, MediaKind::Video) - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_audio_size_formula() {
        // 50 KB audio: 0.5 * 0.5 + 0.3
        assert!((size_trust_score(50_000, MediaKind::Audio) - 0.55).abs() < 1e-9);
        // Saturates at 0.65.
        assert!((size_trust_score(5_000_000, MediaKind::Audio) - 0.65).abs() < 1e-9);
    }

    #[test]
    fn test_fixed_mode_ignores_file() {
        let assessor = MediaAssessor::new(TrustMode::Fixed(0.25));
        let verdict = assessor
            .assess(Path::new("/definitely/not/a/real/file.mp4"), MediaKind::Video)
            .unwrap();
        assert_eq!(verdict.trust_score, 0.25);
        assert!(verdict.suspicious);
        assert!((verdict.confidence - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_fixed_mode_clamps() {
        let assessor = MediaAssessor::new(TrustMode::Fixed(3.0));
        let verdict = assessor
            .assess(Path::new("/unused"), MediaKind::Audio)
            .unwrap();
        assert_eq!(verdict.trust_score, 1.0);
    }

    #[test]
    fn test_size_mode_missing_file_is_io_error() {
        let assessor = MediaAssessor::default();
        assert!(assessor
            .assess(Path::new("/no/such/file.wav"), MediaKind::Audio)
            .is_err());
    }

    #[test]
    fn test_error_verdict_shape() {
        let verdict = MediaVerdict::from_error("video", 1.0, "boom".to_string());
        assert_eq!(verdict.trust_score, 0.5);
        assert!(!verdict.suspicious);
        assert_eq!(verdict.model, "Error");
        assert_eq!(verdict.error.as_deref(), Some("boom"));
    }
}
