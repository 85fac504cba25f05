pub mod actor;
pub mod category;
pub mod genre;
pub mod movie;
pub mod movie_short;
pub mod rating;
pub mod review;
