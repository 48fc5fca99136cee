pub mod observability;
pub mod storage;
pub mod upstream;
