use mongodb::error::Error as MongoError;
use thiserror::Error;

pub type MongoResult<T> = std::result::Result<T, MongoDaoError>;

#[derive(Debug, Error)]
pub enum MongoDaoError {
    #[error("failed to parse MongoDB connection URL `{url}`")]
    InvalidUrl {
        url: String,
        #[source]
        source: MongoError,
    },
    #[error("failed to build MongoDB client from options")]
    ClientConstruction {
        #[source]
        source: MongoError,
    },
    #[error("failed to look up the current game document")]
    FindGame {
        #[source]
        source: MongoError,
    },
    #[error("failed to replace game document `{name}`")]
    ReplaceGame {
        name: String,
        #[source]
        source: MongoError,
    },
    #[error("failed to insert game document `{name}`")]
    InsertGame {
        name: String,
        #[source]
        source: MongoError,
    },
}
