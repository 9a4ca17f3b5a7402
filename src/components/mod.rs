//! UI building blocks: the particle background and the page chrome.

pub mod page;
pub mod particle_field;
