use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("empty key combination")]
    EmptyCombo,

    #[error("key code {0} outside the valid range 1-254")]
    InvalidKeyCode(u16),

    #[error("combo parse error: {0}")]
    ParseError(String),

    #[error("hook channel failure: {0}")]
    ChannelFailure(String),
}

pub type Result<T> = std::result::Result<T, Error>;
