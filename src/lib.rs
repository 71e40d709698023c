pub mod containers;
pub mod model;
pub mod report;
pub mod status;
pub mod table;
