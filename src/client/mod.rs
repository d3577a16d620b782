pub mod dispatcher;

pub use dispatcher::{Dispatcher, DEFAULT_API_URL};
