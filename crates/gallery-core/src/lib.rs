//! Control core for a walkable product gallery.
//!
//! Platform-free: the web and native front-ends feed input and time in and
//! read state back out. Everything here runs on a single cooperative loop,
//! with timers expressed as simulated `Duration`s.

pub mod activity;
pub mod camera;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod exhibit;
pub mod focus;
pub mod packet;
pub mod player;
pub mod route;
pub mod session;
pub mod tour;
pub mod view;

pub use activity::*;
pub use camera::*;
pub use catalog::*;
pub use constants::*;
pub use error::{GalleryError, Result};
pub use exhibit::*;
pub use focus::*;
pub use packet::*;
pub use player::*;
pub use route::*;
pub use session::*;
pub use tour::*;
pub use view::*;
