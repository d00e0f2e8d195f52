pub mod category;
pub mod item;
pub mod page;

pub use category::{Category, CategoryDetail, CategorySummary};
pub use item::Item;
pub use page::Page;
