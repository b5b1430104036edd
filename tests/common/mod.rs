#![allow(dead_code)]

use std::path::Path;

pub const CHECKPOINT: &str = "Wav2Lip/checkpoints/wav2lip_gan.pth";
pub const DETECTOR_WEIGHTS: &str = "Wav2Lip/face_detection/detection/sfd/s3fd.pth";
pub const ENTRY_POINT: &str = "Wav2Lip/inference.py";

/// Default inputs plus a Wav2Lip checkout whose entry-point is `script`.
pub fn create_layout(root: &Path, script: &str) {
    for (relative, contents) in [
        ("input_video.mp4", "video"),
        ("new_audio.wav", "audio"),
        (CHECKPOINT, "weights"),
        (DETECTOR_WEIGHTS, "weights"),
        (ENTRY_POINT, script),
    ] {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create fixture dirs");
        }
        std::fs::write(&path, contents).expect("write fixture file");
    }
}
