pub mod actors;
pub mod home;
pub mod movies;
