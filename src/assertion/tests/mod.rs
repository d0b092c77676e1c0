//! Unit tests for the fluent assertion chains and report rendering.
