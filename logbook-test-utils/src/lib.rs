pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::TestContext;

pub mod prelude {
    pub use crate::{
        fixtures::factory,
        setup::{test_setup, test_setup_without_tables},
        TestContext, TestError,
    };
}
