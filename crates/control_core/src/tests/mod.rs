mod coordinator_tests;
mod session_tests;
