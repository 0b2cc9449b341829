pub mod comentarios;
pub mod followers;
pub mod likes;
pub mod posts;
pub mod users;

pub use comentarios::ComentarioRepository;
pub use followers::FollowerRepository;
pub use likes::LikeRepository;
pub use posts::PostRepository;
pub use users::UserRepository;
