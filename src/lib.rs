pub mod db;
pub mod remo;
pub mod room_condition;
