//! Data Models
//!
//! 每个实体一个文件：数据库行结构 + 创建/更新 DTO

pub mod announcement;
pub mod gallery_item;
pub mod order;
pub mod quote;
pub mod review;

pub use announcement::{Announcement, AnnouncementCreate, AnnouncementUpdate};
pub use gallery_item::{GalleryItem, GalleryItemCreate};
pub use order::{Order, OrderCreate, OrderStatusUpdate};
pub use quote::{Quote, QuoteCreate};
pub use review::{Review, ReviewCreate};
