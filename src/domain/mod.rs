pub mod builder;
pub mod edge;
pub mod extractor;
pub mod graph;
pub mod grouper;
pub mod layout;
pub mod ports;
pub mod rank;
pub mod scope;
pub mod type_ref;
