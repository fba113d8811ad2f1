//! Common types shared by all catalog entities

pub mod aggregate_id;

pub use aggregate_id::AggregateId;
