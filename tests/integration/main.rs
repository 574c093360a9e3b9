//! Integration tests for the riscof-prerun binary

mod cli_tests;
