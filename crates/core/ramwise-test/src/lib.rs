//! Integration tests for the ramwise workspace live in `tests/`.
