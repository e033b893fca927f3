mod static_content;

pub use static_content::{StaticContentSource, SITE_CONTENT};
