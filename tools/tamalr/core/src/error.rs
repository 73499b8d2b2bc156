use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("no ROM data provided")]
    Empty,
    #[error("ROM is {size} bytes, at most {max} are supported")]
    TooLarge { size: usize, max: usize },
    #[error("the emulated core rejected the program")]
    CoreRejected,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("save state buffer holds {got} bytes, {needed} are required")]
    BufferTooSmall { needed: usize, got: usize },
}
