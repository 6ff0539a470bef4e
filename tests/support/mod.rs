#![allow(dead_code)]

pub mod api;
pub mod architecture;
