mod greeting;
mod id_generator;

pub use greeting::{Greeting, GreetingError, GreetingService, DEFAULT_NAME};
pub use id_generator::IdGenerator;
