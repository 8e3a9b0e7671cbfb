pub mod cases;
pub mod method;
pub mod runner;
pub mod walker;
pub mod writer;
