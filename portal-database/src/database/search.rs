use std::fmt::Write;

use sea_orm::sea_query::{Expr, Func, Iden, LikeExpr, SimpleExpr};
use sea_orm::{entity::*, query::*, Condition, DbErr, PaginatorTrait};

use crate::get_database_connection;

/// SQL REPLACE, available on both PostgreSQL and SQLite.
struct ReplaceFunc;

impl Iden for ReplaceFunc {
    fn unquoted(&self, s: &mut dyn Write) {
        write!(s, "replace").unwrap();
    }
}

/**
 * One searchable column of an entity. The squash_whitespace flag turns
 * on the whitespace-stripped comparison used by the PI profile name and
 * nothing else.
 */
pub struct SearchField<C> {
    pub column: C,
    pub squash_whitespace: bool,
}

impl<C> SearchField<C> {
    pub fn text(column: C) -> Self {
        SearchField {
            column,
            squash_whitespace: false,
        }
    }

    pub fn squashed(column: C) -> Self {
        SearchField {
            column,
            squash_whitespace: true,
        }
    }
}

/**
 * Implemented by every entity that participates in the faceted search.
 * The engine never branches on a concrete entity type; it only walks
 * the field descriptors.
 */
pub trait Searchable: EntityTrait {
    fn search_fields() -> Vec<SearchField<Self::Column>>;
}

/**
 * Escape LIKE wildcards so the query string is matched literally
 *
 * # Arguments
 * @param input: &str - The raw query fragment
 *
 * # Returns
 * @return String - The fragment with \, % and _ escaped
 */
fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/**
 * Build the predicate for one searchable column. Plain fields compare
 * lower(column) against the lowercased query; squashed fields also
 * strip spaces from both sides first.
 */
fn field_condition<C: ColumnTrait>(field: SearchField<C>, query: &str) -> SimpleExpr {
    if field.squash_whitespace {
        let squashed = query.replace(' ', "").to_lowercase();
        let pattern = format!("%{}%", escape_like(&squashed));
        let without_spaces = Func::cust(ReplaceFunc).args([
            Expr::col(field.column).into(),
            Expr::val(" ").into(),
            Expr::val("").into(),
        ]);
        Expr::expr(Func::lower(without_spaces)).like(LikeExpr::new(pattern).escape('\\'))
    } else {
        let pattern = format!("%{}%", escape_like(&query.to_lowercase()));
        Expr::expr(Func::lower(Expr::col(field.column)))
            .like(LikeExpr::new(pattern).escape('\\'))
    }
}

/**
 * OR together the per-field predicates of an entity. NULL columns never
 * match, so rows with absent fields are excluded rather than erroring.
 */
pub fn search_condition<E: Searchable>(query: &str) -> Condition {
    let mut condition = Condition::any();
    for field in E::search_fields() {
        condition = condition.add(field_condition(field, query));
    }
    condition
}

/**
 * Fetch every row of an entity matching the query
 *
 * # Arguments
 * @param query: &str - The free-text query, assumed non-empty
 *
 * # Returns
 * @return Result<Vec<E::Model>, sea_orm::DbErr> - The matching rows in database order
 */
pub async fn search_all<E>(query: &str) -> Result<Vec<E::Model>, DbErr>
where
    E: Searchable,
{
    let conn = get_database_connection().await?;
    E::find()
        .filter(search_condition::<E>(query))
        .all(&conn)
        .await
}

/**
 * Fetch one page of rows matching the query, plus the total match count.
 * Runs the exact same predicate as search_all so pages concatenate into
 * the full result list.
 *
 * # Arguments
 * @param query: &str - The free-text query
 * @param offset: u64 - How many matches to skip
 * @param limit: u64 - The page size
 *
 * # Returns
 * @return Result<(Vec<E::Model>, u64), sea_orm::DbErr> - The page and the total count
 */
pub async fn search_page<E>(query: &str, offset: u64, limit: u64) -> Result<(Vec<E::Model>, u64), DbErr>
where
    E: Searchable,
    E::Model: Send + Sync,
{
    let conn = get_database_connection().await?;
    let total = E::find()
        .filter(search_condition::<E>(query))
        .count(&conn)
        .await?;
    let items = E::find()
        .filter(search_condition::<E>(query))
        .offset(offset)
        .limit(limit)
        .all(&conn)
        .await?;
    Ok((items, total))
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::models::{pi_profiles, publications, student_profiles, vendor_profiles};
    use crate::setup_test_environment;
    use sea_orm::Set;
    use serial_test::serial;

    async fn seed_pi(name: &str, department: Option<&str>) {
        let conn = get_database_connection().await.unwrap();
        pi_profiles::ActiveModel {
            name: Set(Some(name.to_string())),
            department: Set(department.map(|d| d.to_string())),
            ..Default::default()
        }
        .insert(&conn)
        .await
        .unwrap();
    }

    async fn seed_student(name: &str) {
        let conn = get_database_connection().await.unwrap();
        student_profiles::ActiveModel {
            name: Set(Some(name.to_string())),
            ..Default::default()
        }
        .insert(&conn)
        .await
        .unwrap();
    }

    #[tokio::test]
    #[serial]
    async fn test_substring_match_is_case_insensitive() {
        setup_test_environment().await;
        seed_pi("Maria Fernandez", Some("Molecular Biology")).await;

        let by_name = search_all::<pi_profiles::Entity>("fernandez").await.unwrap();
        assert_eq!(by_name.len(), 1);

        let by_department = search_all::<pi_profiles::Entity>("MOLECULAR").await.unwrap();
        assert_eq!(by_department.len(), 1);

        let no_match = search_all::<pi_profiles::Entity>("xyz123nomatch").await.unwrap();
        assert!(no_match.is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn test_pi_name_matches_with_whitespace_stripped() {
        setup_test_environment().await;
        seed_pi("John Doe", None).await;

        let spaced = search_all::<pi_profiles::Entity>("john doe").await.unwrap();
        assert_eq!(spaced.len(), 1);

        let squashed = search_all::<pi_profiles::Entity>("johndoe").await.unwrap();
        assert_eq!(squashed.len(), 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_whitespace_squash_does_not_apply_to_other_entities() {
        setup_test_environment().await;
        seed_student("Jane Roe").await;

        let spaced = search_all::<student_profiles::Entity>("jane roe").await.unwrap();
        assert_eq!(spaced.len(), 1);

        // Student names match as literal substrings only.
        let squashed = search_all::<student_profiles::Entity>("janeroe").await.unwrap();
        assert!(squashed.is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn test_null_fields_are_excluded_not_errors() {
        setup_test_environment().await;
        seed_pi("Ada", None).await;

        let matches = search_all::<pi_profiles::Entity>("physics").await.unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn test_like_wildcards_are_literal() {
        setup_test_environment().await;
        let conn = get_database_connection().await.unwrap();
        vendor_profiles::ActiveModel {
            company_name: Set(Some("100% Genomics".to_string())),
            ..Default::default()
        }
        .insert(&conn)
        .await
        .unwrap();
        vendor_profiles::ActiveModel {
            company_name: Set(Some("Plain Reagents".to_string())),
            ..Default::default()
        }
        .insert(&conn)
        .await
        .unwrap();

        let matches = search_all::<vendor_profiles::Entity>("100%").await.unwrap();
        assert_eq!(matches.len(), 1);

        // "%" alone is not a match-everything wildcard.
        let percent_only = search_all::<vendor_profiles::Entity>("%").await.unwrap();
        assert_eq!(percent_only.len(), 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_pages_concatenate_into_full_result() {
        setup_test_environment().await;
        for i in 0..7 {
            let conn = get_database_connection().await.unwrap();
            publications::ActiveModel {
                title: Set(format!("Genome assembly part {}", i)),
                authors: Set("Doe, J.".to_string()),
                ..Default::default()
            }
            .insert(&conn)
            .await
            .unwrap();
        }

        let full = search_all::<publications::Entity>("genome").await.unwrap();
        assert_eq!(full.len(), 7);

        let mut paged = Vec::new();
        let mut offset = 0;
        loop {
            let (items, total) = search_page::<publications::Entity>("genome", offset, 5)
                .await
                .unwrap();
            assert_eq!(total, 7);
            if items.is_empty() {
                break;
            }
            offset += items.len() as u64;
            paged.extend(items);
        }
        assert_eq!(paged, full);
    }
}
