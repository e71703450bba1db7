pub mod controls;
pub mod track;
