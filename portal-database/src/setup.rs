use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};

use crate::database::lookups::create_lookup_tables;
use crate::models;

/**
 * Create the table behind one entity if it does not exist yet
 *
 * # Arguments
 * @param conn: &DatabaseConnection - The database connection
 *
 * # Returns
 * @return Result<(), sea_orm::DbErr> - The result of the operation
 */
pub async fn create_table<E>(conn: &DatabaseConnection) -> Result<(), DbErr>
where
    E: EntityTrait + Default,
{
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);
    let mut statement = schema.create_table_from_entity(E::default());
    statement.if_not_exists();
    conn.execute(backend.build(&statement)).await?;
    Ok(())
}

/**
 * Create the full portal schema: the seven searchable entity tables,
 * opportunities, and every registered lookup table. Production
 * deployments run migrations out of band; this covers tests and local
 * bootstrap.
 *
 * # Arguments
 * @param conn: &DatabaseConnection - The database connection
 *
 * # Returns
 * @return Result<(), sea_orm::DbErr> - The result of the operation
 */
pub async fn create_all_tables(conn: &DatabaseConnection) -> Result<(), DbErr> {
    create_table::<models::pi_profiles::Entity>(conn).await?;
    create_table::<models::student_profiles::Entity>(conn).await?;
    create_table::<models::vendor_profiles::Entity>(conn).await?;
    create_table::<models::industry_profiles::Entity>(conn).await?;
    create_table::<models::research_facilities::Entity>(conn).await?;
    create_table::<models::publications::Entity>(conn).await?;
    create_table::<models::technologies::Entity>(conn).await?;
    create_table::<models::opportunities::Entity>(conn).await?;
    create_lookup_tables(conn).await?;
    Ok(())
}
