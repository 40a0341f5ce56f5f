mod auth;
mod seed;
