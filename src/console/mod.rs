mod errors;
mod menu;
mod prompt;
mod session;

pub use errors::ConsoleError;
pub use session::Session;
