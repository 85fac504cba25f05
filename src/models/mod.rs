pub mod actor;
pub mod category;
pub mod genre;
pub mod movie;
pub mod movie_actor;
pub mod movie_director;
pub mod movie_genre;
pub mod movie_short;
pub mod rating;
pub mod rating_star;
pub mod review;

pub use actor::{Entity as Actor, Model as ActorModel};
pub use category::{Entity as Category, Model as CategoryModel};
pub use genre::{Entity as Genre, Model as GenreModel};
pub use movie::{Entity as Movie, Model as MovieModel};
pub use movie_actor::Entity as MovieActor;
pub use movie_director::Entity as MovieDirector;
pub use movie_genre::Entity as MovieGenre;
pub use movie_short::{Entity as MovieShort, Model as MovieShortModel};
pub use rating::{Entity as Rating, Model as RatingModel};
pub use rating_star::{Entity as RatingStar, Model as RatingStarModel};
pub use review::{Entity as Review, Model as ReviewModel};
