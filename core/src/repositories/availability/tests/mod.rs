//! Tests for the availability repository layer

#[cfg(test)]
mod repository_tests;
