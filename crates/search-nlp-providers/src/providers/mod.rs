pub mod cohere;
pub mod local_server;

pub use cohere::CohereProvider;
pub use local_server::LocalModelServerProvider;
