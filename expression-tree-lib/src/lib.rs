pub mod notation;
