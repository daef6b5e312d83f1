//! Property-based tests for output shaping
