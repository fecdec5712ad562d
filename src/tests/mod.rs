//! integrated tests
