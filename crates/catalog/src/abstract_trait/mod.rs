mod chef;
pub mod product;

pub use self::chef::{ChefQueryRepositoryTrait, DynChefQueryRepository};
