mod refresh_token;
mod user;
