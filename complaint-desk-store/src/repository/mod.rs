pub mod complaint_repository;
