use crate::state::Position;
use thiserror::Error;

/// failures a render can surface to the batch layer. missing visual
/// assets are not here on purpose: those degrade to programmatic
/// fallbacks instead of erroring.
#[derive(Debug, Error)]
pub enum RenderError {
    /// the geometry tables are incomplete for a table size we claim
    /// to support. this is a bug in the tuning data, not bad input,
    /// so chip placement fails loudly instead of mis-rendering.
    #[error("no chip geometry for {position} at a {players}-handed table")]
    ChipGeometry { position: Position, players: usize },
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
