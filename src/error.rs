use std::io;
use thiserror::Error;

/// Everything that can go wrong while building an icon.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("No source image was given")]
    MissingSource,
    #[error("At least one icon size is required")]
    NoIconSizes,
    #[error("Icon size {0}px is out of range (1 to 256)")]
    InvalidIconSize(u32),
    #[error("Icon size {0}px is listed more than once")]
    DuplicateIconSize(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
