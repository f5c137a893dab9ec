mod config;
mod cpu;
mod error;
mod file_loader;
mod instruction;
mod sign_extend;
mod state;
mod trap_vector;

pub use crate::config::Config;
pub use crate::error::VmError;
use crate::file_loader::load_file;
use crate::sign_extend::SignExtend;
pub use crate::state::{Condition, State};

pub fn run(config: Config) -> Result<(), VmError> {
    let mut state = load_file(config.filename, State::new())?;

    state.run_until_halt();

    Ok(())
}
