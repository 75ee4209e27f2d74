mod gear_icon;

pub use gear_icon::GearIcon;
