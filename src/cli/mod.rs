mod context;
mod flags;
mod parse;
pub mod prompts;

pub use context::{Context, EXIT_USAGE};
pub use flags::CliFlags;
pub use parse::parse;

/// Run CLI mode with already parsed flags. Returns the process exit code.
pub fn run(flags: CliFlags) -> i32 {
    let mut ctx = Context::new(flags);
    match ctx.run() {
        Ok(()) => 0,
        Err(exit) => exit.code(),
    }
}
