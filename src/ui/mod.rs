pub mod chart;
pub mod panels;
pub mod report;
pub mod table;
