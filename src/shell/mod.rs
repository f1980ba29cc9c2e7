// Composition root for the cart service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate concrete infrastructure implementations.
// - Load the cart store and expose it over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
