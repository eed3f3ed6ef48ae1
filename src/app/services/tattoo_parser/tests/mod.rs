//! Tests for the tattoo code parser

pub mod format_tests;
pub mod parser_tests;
