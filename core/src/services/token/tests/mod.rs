//! Tests for token service

mod interop_tests;
