pub mod cities;
pub mod maze;
pub mod missionaries;
