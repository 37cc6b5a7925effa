pub mod handlers;
pub mod login_request;
pub mod login_response;
pub mod password;
pub mod purge;
pub mod refresh_token_request;
pub mod refresh_token_response;
pub mod register_request;
pub mod routes;
pub mod state;
pub mod token_response;
pub mod token_service;
