pub mod backend_mock;
