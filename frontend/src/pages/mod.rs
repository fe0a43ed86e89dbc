pub mod features;
pub mod landing;
