use thiserror::Error;

/// Failures surfaced while preparing the machine.
/// Execution itself never fails; see `Engine::step`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("program is too large ({size} bytes), at most {max_size} bytes fit in memory")]
    RomTooLarge { size: usize, max_size: usize },

    #[error("unable to read program")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
