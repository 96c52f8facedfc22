pub mod cards;
pub mod map;
pub mod panels;
