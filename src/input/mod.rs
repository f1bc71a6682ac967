mod reader;
mod session;

pub use reader::TokenReader;
pub use session::{GeometryArgs, PromptSession};
