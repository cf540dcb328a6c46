pub mod home;
pub mod about;
pub mod projects;
pub mod contact;
