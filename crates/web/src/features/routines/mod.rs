pub mod handlers;
mod routes;
mod services;

pub use routes::routes;
