mod api;
mod gateway;
mod identity;
