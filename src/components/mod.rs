pub mod charts;
pub mod diagram;
