//! Task collection from an interactive input source.
//!
//! The collector never touches stdin directly; it asks an
//! [`InputProvider`], so runs can be driven by a terminal
//! ([`StdinProvider`]) or by a fixed script ([`ScriptedProvider`]).

mod collector;
mod provider;

pub use collector::TaskCollector;
pub use provider::{InputProvider, ScriptedProvider, StdinProvider};
