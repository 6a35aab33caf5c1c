mod common;
mod session;
mod validation;
