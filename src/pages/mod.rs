//! One component per view panel.

pub mod contact;
pub mod dashboard;
pub mod home;
pub mod portal;
