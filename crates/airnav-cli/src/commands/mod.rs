mod export;
mod info;
mod nearest;
mod reach;
mod route;

pub use export::export_kml;
pub use info::info;
pub use nearest::nearest;
pub use reach::reach;
pub use route::route;
