//! Macro-generated test suite for `DocumentStore` contract validation.
//!
//! # Generated Tests
//!
//! - `test_insert_and_get`: insert then fetch by id
//! - `test_get_unknown`: unknown id returns None
//! - `test_query_equality`: equality predicates combine with AND
//! - `test_query_not_equal_requires_field`: documents lacking the field never match
//! - `test_query_offset_limit`: offset applies before limit, store order kept
//! - `test_update_merges`: partial update leaves other fields untouched
//! - `test_update_unknown_fails`: updating an unknown id is an error
//! - `test_concurrent_inserts`: parallel inserts all land with distinct ids

/// Generate a `DocumentStore` conformance test suite.
///
/// `$factory` must evaluate to a fresh, empty store implementing
/// `DocumentStore + Clone + 'static`. It is re-evaluated for each test.
#[macro_export]
macro_rules! document_store_tests {
    ($factory:expr) => {
        mod document_store_contract_tests {
            use super::*;
            use registrar::core::store::{DocumentQuery, DocumentStore};
            use serde_json::json;

            #[tokio::test]
            async fn test_insert_and_get() {
                let store = $factory;
                let id = store
                    .insert("tbl_Faculty", fields(json!({"FacultyName": "CS", "IsDelete": false})))
                    .await
                    .unwrap();

                let doc = store.get("tbl_Faculty", &id).await.unwrap().unwrap();
                assert_eq!(doc.id, id);
                assert_eq!(doc.data["FacultyName"], "CS");
                assert_eq!(doc.data["IsDelete"], false);
                assert!(!doc.data.contains_key("_id"));
            }

            #[tokio::test]
            async fn test_get_unknown() {
                let store = $factory;
                assert!(store.get("tbl_Faculty", UNKNOWN_ID).await.unwrap().is_none());
                assert!(store.get("tbl_Faculty", "not-an-id").await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_query_equality() {
                let store = $factory;
                store
                    .insert("tbl_User", fields(json!({"UserName": "an", "PassWord": "pw"})))
                    .await
                    .unwrap();
                store
                    .insert("tbl_User", fields(json!({"UserName": "an", "PassWord": "other"})))
                    .await
                    .unwrap();

                let query = DocumentQuery::new()
                    .where_eq("UserName", "an")
                    .where_eq("PassWord", "pw");
                let docs = store.query("tbl_User", &query).await.unwrap();
                assert_eq!(docs.len(), 1);
                assert_eq!(docs[0].data["PassWord"], "pw");

                let none = DocumentQuery::new().where_eq("UserName", "binh");
                assert!(store.query("tbl_User", &none).await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_query_not_equal_requires_field() {
                let store = $factory;
                store
                    .insert("tbl_Major", fields(json!({"MajorName": "A", "IsDelete": false})))
                    .await
                    .unwrap();
                store
                    .insert("tbl_Major", fields(json!({"MajorName": "B", "IsDelete": true})))
                    .await
                    .unwrap();
                store
                    .insert("tbl_Major", fields(json!({"MajorName": "C"})))
                    .await
                    .unwrap();

                let query = DocumentQuery::new().where_ne("IsDelete", true);
                let docs = store.query("tbl_Major", &query).await.unwrap();
                assert_eq!(docs.len(), 1);
                assert_eq!(docs[0].data["MajorName"], "A");
            }

            #[tokio::test]
            async fn test_query_offset_limit() {
                let store = $factory;
                for i in 0..7 {
                    store
                        .insert("tbl_Major", fields(json!({"MajorName": format!("M{i}")})))
                        .await
                        .unwrap();
                }

                let query = DocumentQuery::new().offset(2).limit(3);
                let names: Vec<String> = store
                    .query("tbl_Major", &query)
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|d| d.data["MajorName"].as_str().unwrap().to_string())
                    .collect();
                assert_eq!(names, vec!["M2", "M3", "M4"]);

                let past_end = DocumentQuery::new().offset(10).limit(3);
                assert!(store.query("tbl_Major", &past_end).await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_update_merges() {
                let store = $factory;
                let id = store
                    .insert(
                        "tbl_Student",
                        fields(json!({"FirstName": "An", "LastName": "Nguyen", "IsDelete": false})),
                    )
                    .await
                    .unwrap();

                store
                    .update("tbl_Student", &id, fields(json!({"FirstName": "Binh"})))
                    .await
                    .unwrap();

                let doc = store.get("tbl_Student", &id).await.unwrap().unwrap();
                assert_eq!(doc.data["FirstName"], "Binh");
                assert_eq!(doc.data["LastName"], "Nguyen");
                assert_eq!(doc.data["IsDelete"], false);
            }

            #[tokio::test]
            async fn test_update_unknown_fails() {
                let store = $factory;
                let result = store
                    .update("tbl_Student", UNKNOWN_ID, fields(json!({"FirstName": "Binh"})))
                    .await;
                assert!(result.is_err());
            }

            #[tokio::test]
            async fn test_concurrent_inserts() {
                let store = $factory;
                let mut handles = Vec::new();
                for i in 0..10 {
                    let store = store.clone();
                    handles.push(tokio::spawn(async move {
                        store
                            .insert("tbl_Faculty", fields(json!({"FacultyName": format!("F{i}")})))
                            .await
                            .unwrap()
                    }));
                }

                let mut ids = Vec::new();
                for handle in handles {
                    ids.push(handle.await.unwrap());
                }
                ids.sort();
                ids.dedup();
                assert_eq!(ids.len(), 10);

                let all = store
                    .query("tbl_Faculty", &DocumentQuery::new())
                    .await
                    .unwrap();
                assert_eq!(all.len(), 10);
            }
        }
    };
}
