pub mod models;
pub mod serialize;

pub use models::{
    Comentario, Follower, Like, NewComentario, NewFollower, NewLike, NewPost, NewUser, Post,
    User,
};
pub use serialize::{ApiPayload, ComentarioView, FollowerView, LikeView, PostView, UserView};
