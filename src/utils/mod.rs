pub mod error;
pub mod interactive;
pub mod output;
pub mod stats;
pub mod validate;

pub use error::{AppError, AppResult, FlowResult};
pub use interactive::Console;
pub use output::OutputStyle;
