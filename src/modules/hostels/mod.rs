//! Hostel buildings and their capacity figures.

pub mod controller;
pub mod form;
pub mod service;
pub mod view;

use hostel_client::HostelApi;

use crate::modules::resource::CrudScreen;

pub type HostelScreen = CrudScreen<HostelApi>;
