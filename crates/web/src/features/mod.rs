pub mod standings;
