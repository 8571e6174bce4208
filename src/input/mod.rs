//! Input handling
//! Locates and loads the resume file to upload

pub mod file_detector;
pub mod resume_file;

pub use resume_file::ResumeFile;
