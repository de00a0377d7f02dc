//! Shared test harness for the franchise crates.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares which tables and
//! fixtures are needed, and `build()` returns a [`TestContext`] backed by an
//! in-memory SQLite database.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::factory, test_setup_with_league_tables, test_setup_with_tables, TestBuilder,
        TestContext, TestError,
    };
}

/// Creates a [`TestContext`] with tables for the given entities, or no tables.
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestContext::new().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Creates a [`TestContext`] with the team, player and depth chart tables, plus any
/// additional entities given.
#[macro_export]
macro_rules! test_setup_with_league_tables {
    () => {{
        async {
            let setup = $crate::TestContext::new().await?;
            setup.with_tables($crate::context::league_tables()).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};

    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let mut stmts = $crate::context::league_tables();
            stmts.extend(vec![
                $(schema.create_table_from_entity($entity),)+
            ]);
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
