pub mod client;
pub mod db;
pub mod error;
pub mod notify;
pub mod routes;
pub mod state;
pub mod telegram;
pub mod worker;
