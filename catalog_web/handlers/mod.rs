mod products;
mod users;

pub use products::*;
pub use users::*;
