pub mod catalog;
pub mod detail;
pub mod helpers;
pub mod immersive;
pub mod status;
pub mod tour;
