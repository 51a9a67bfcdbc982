/// Connection setup tests
pub mod db_tests;

/// CRUD operations tests for the product table
pub mod crud_tests;
