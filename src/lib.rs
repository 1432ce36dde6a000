pub mod builtin;
pub mod config;
pub mod font;
pub mod generator;
pub mod icon;
pub mod text;
