pub mod allocations;
pub mod dashboard;
pub mod hostels;
pub mod resource;
pub mod rooms;
pub mod students;
