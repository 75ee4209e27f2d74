mod maintenance;
mod pages;

pub use maintenance::*;
pub use pages::Pages;
