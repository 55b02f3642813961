// Composition root for the activities bounded context.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in memory directory and wire it into the use case handlers.
// - Expose the HTTP router and GraphQL schema to the binary and to tests.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
