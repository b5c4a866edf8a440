use thiserror::Error;

/// Error type for test setup and fixture insertion.
#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
