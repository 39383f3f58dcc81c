pub mod space;
pub mod space_file;
