pub mod config;
pub mod q_agent;
