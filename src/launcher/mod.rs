pub mod interpreter;
pub mod invocation;
pub mod launch;
pub mod runner;

pub use interpreter::resolve_interpreter;
pub use invocation::{build_invocation, Invocation};
pub use launch::launch_inference;
pub use runner::{ChildExit, ExternalRunner, ProcessRunner};
