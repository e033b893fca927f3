pub mod entities;
pub mod text;
