pub mod landing;
pub mod question;
pub mod reward;
