//! End-to-end tests for the interview flow live in `tests/`.
