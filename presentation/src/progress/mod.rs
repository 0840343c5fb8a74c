//! Progress reporting while a query is triaged

pub mod reporter;
