pub mod results;
pub mod rows;
