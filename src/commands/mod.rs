pub mod compose;
pub mod order;
