pub mod cli;
pub mod config;
pub mod error;
pub mod geom;
pub mod input;
pub mod output;

pub use cli::{CliArgs, OutputFormat};
pub use error::BoxoverError;
pub use geom::Rect;
pub use input::{GeometryArgs, PromptSession, TokenReader};
