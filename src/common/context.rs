use sqlx::{Pool, Postgres};

pub trait Context: Sync + Send {
    fn db(&self) -> &Pool<Postgres>;
}
