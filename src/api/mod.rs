pub mod admin;
pub mod ban;
pub mod guest;
pub mod likes;
pub mod player;
pub mod sensitivity;
pub mod visits;
pub mod wrapper;
