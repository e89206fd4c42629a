pub mod inmemory_repo;
pub mod mongo_repo;
pub mod repo;
