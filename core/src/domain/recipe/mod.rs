pub mod entities;
pub mod images;
pub mod parser;
pub mod ports;
pub mod prompt;
pub mod schema;
pub mod services;
pub mod session;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
