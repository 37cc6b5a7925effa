pub mod bearer;
pub mod proxy;
pub mod route_table;
pub mod routes;
pub mod state;
