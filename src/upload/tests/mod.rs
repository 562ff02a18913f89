//! Unit tests for the upload gate.
