//! Integration tests that drive the library against real files.

mod landing_page;
