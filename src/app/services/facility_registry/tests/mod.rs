//! Tests for the facility registry service

pub mod registry_tests;
