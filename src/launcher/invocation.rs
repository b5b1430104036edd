use std::ffi::OsString;
use std::path::PathBuf;

use crate::bootstrap::RunPaths;

/// One fully-resolved call of the external inference program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub working_dir: PathBuf,
}

impl Invocation {
    /// Program followed by its arguments, the way it would be typed.
    pub fn argv(&self) -> Vec<OsString> {
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(self.program.clone().into_os_string());
        argv.extend(self.args.iter().cloned());
        argv
    }
}

pub fn build_invocation(paths: &RunPaths, interpreter: PathBuf, resize_factor: u32) -> Invocation {
    let args = vec![
        paths.entry_point.absolute.clone().into_os_string(),
        OsString::from("--checkpoint_path"),
        paths.checkpoint.absolute.clone().into_os_string(),
        OsString::from("--face"),
        paths.input_video.absolute.clone().into_os_string(),
        OsString::from("--audio"),
        paths.input_audio.absolute.clone().into_os_string(),
        OsString::from("--outfile"),
        paths.output_video.absolute.clone().into_os_string(),
        OsString::from("--resize_factor"),
        OsString::from(resize_factor.to_string()),
    ];

    Invocation {
        program: interpreter,
        args,
        working_dir: paths.tool_dir.absolute.clone(),
    }
}
