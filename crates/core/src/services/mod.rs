pub mod allocation_service;
