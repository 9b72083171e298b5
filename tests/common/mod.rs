#![allow(dead_code)]

pub mod glyphs;
pub mod synthetic_image;
