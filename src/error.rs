//! Crate-level error: everything that can stop the app before or while the
//! window runs.

use thiserror::Error;

use crate::config::ConfigError;
use crate::core::CatalogError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("gui: {0}")]
    Gui(#[from] iced::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
