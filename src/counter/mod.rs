pub mod increases;
