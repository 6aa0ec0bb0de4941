// ABOUTME: Core data models for alerts and their request/stored shapes

pub mod alert;

pub use alert::{Alert, AlertBody, AlertKey, AlertVariant, NewAlert};
