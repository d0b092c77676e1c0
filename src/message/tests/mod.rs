//! Unit tests for the message module.
//!
//! Tests are organised by domain concept, covering the construction laws,
//! the field-wise matching laws, and the rendered descriptions.
