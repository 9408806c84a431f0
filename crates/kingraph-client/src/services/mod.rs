//! `ApiClient` implementations of the service traits. Each method only names
//! its endpoint and attaches a query or body; status handling lives in the
//! request helper.

mod ai;
mod analysis;
mod graph;
mod network;
mod persons;
mod relationships;
