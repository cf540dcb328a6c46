pub mod navigation_header;

pub use navigation_header::NavigationHeader;
