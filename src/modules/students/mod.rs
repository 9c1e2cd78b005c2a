//! Student roster: list, create, edit, delete, and roll-number lookup.

pub mod controller;
pub mod form;
pub mod service;
pub mod view;

use hostel_client::StudentApi;

use crate::modules::resource::CrudScreen;

pub type StudentScreen = CrudScreen<StudentApi>;
