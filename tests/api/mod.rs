//! REST API endpoint tests

mod employee_tests;
mod health_tests;
mod resource_tests;
