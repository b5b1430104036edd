use std::path::Path;
use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

pub fn env_lock() -> &'static Mutex<()> {
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

pub fn lock_env() -> MutexGuard<'static, ()> {
    env_lock()
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
}

pub const LAYOUT_FILES: [&str; 5] = [
    "input_video.mp4",
    "new_audio.wav",
    "Wav2Lip/inference.py",
    "Wav2Lip/checkpoints/wav2lip_gan.pth",
    "Wav2Lip/face_detection/detection/sfd/s3fd.pth",
];

/// Lays out the default inputs and a Wav2Lip checkout under `root`.
pub fn create_layout(root: &Path) {
    for relative in LAYOUT_FILES {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create fixture dirs");
        }
        std::fs::write(&path, b"fixture").expect("write fixture file");
    }
}

pub fn remove_artifact(root: &Path, relative: &str) {
    std::fs::remove_file(root.join(relative)).expect("remove fixture file");
}
