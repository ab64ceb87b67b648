//! Request processing middleware and access control guards.

pub mod auth;

#[cfg(test)]
mod test;
