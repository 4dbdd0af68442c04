// Composition root for the IRRF simulator.
//
// - config: read settings from the environment.
// - state: wire the row store, calculator and printer into the use case handlers.
// - http / graphql: expose the handlers to operators.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
