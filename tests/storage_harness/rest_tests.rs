//! REST integration test macro for storage backends.
//!
//! The `rest_integration_tests!` macro generates HTTP-level tests that drive
//! the complete server (router → handler → EntityService → DocumentStore)
//! through `axum_test::TestServer`.
//!
//! # Generated Tests
//!
//! ## Entity routes
//! - `test_add_then_list`: add 201, list returns the record with `IsDelete: false`
//! - `test_duplicate_key_rejected`: second add with same key is 200 / status 0
//! - `test_soft_delete_hides_record`: delete, list 404, delete again 200, key reusable
//! - `test_update_overwrites_supplied_fields`: absent fields and `IsDelete` untouched
//! - `test_unknown_id`: update/delete on unknown id → 404 / status 0
//! - `test_missing_id_is_bad_request`: update/delete without `Id` → 400
//! - `test_pagination`: pageNumber/perPage window and totalRecord
//! - `test_invalid_page_parameters`: non-numeric or zero → 400
//! - `test_full_name_derived_on_add_only`: student/teacher `FullName`
//! - `test_malformed_body`: invalid JSON → 400 envelope
//!
//! ## Login check
//! - `test_check_user_student_with_major`
//! - `test_check_user_teacher_with_missing_faculty`
//! - `test_check_user_wrong_password`
//! - `test_check_user_unknown_type`
//! - `test_check_user_missing_parameter`
//!
//! ## Misc
//! - `test_health`

/// Generate a REST integration test suite for a storage backend.
///
/// `$store_factory` must evaluate to a fresh, empty `DocumentStore`.
#[macro_export]
macro_rules! rest_integration_tests {
    ($store_factory:expr) => {
        mod rest_integration_tests {
            use super::*;
            use axum::body::Bytes;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use registrar::server::ServerBuilder;
            use serde_json::{Value, json};

            async fn make_server() -> TestServer {
                let store = $store_factory;
                let router = ServerBuilder::new().with_store(store).build().unwrap();
                TestServer::new(router)
            }

            async fn add(server: &TestServer, entity: &str, body: Value) -> String {
                let response = server
                    .post(&format!("/api/{entity}/add-{entity}"))
                    .json(&body)
                    .await;
                response.assert_status(StatusCode::CREATED);
                added_id(&response.json::<Value>())
            }

            async fn list(server: &TestServer, entity: &str, query: &[(&str, &str)]) -> (StatusCode, Value) {
                let mut request = server.get(&format!("/api/{entity}/getlist"));
                for (key, value) in query {
                    request = request.add_query_param(key, value);
                }
                let response = request.await;
                (response.status_code(), response.json::<Value>())
            }

            async fn check_user(server: &TestServer, user_name: &str, pass_word: &str) -> Value {
                let response = server
                    .get("/api/user/checkuser")
                    .add_query_param("UserName", user_name)
                    .add_query_param("PassWord", pass_word)
                    .await;
                response.assert_status_ok();
                response.json::<Value>()
            }

            // ==============================================================
            // Entity routes
            // ==============================================================

            #[tokio::test]
            async fn test_add_then_list() {
                let server = make_server().await;

                let response = server
                    .post("/api/faculty/add-faculty")
                    .json(&json!({"FacultyName": "CS"}))
                    .await;
                response.assert_status(StatusCode::CREATED);
                let body: Value = response.json();
                assert_eq!(body["status"], 1);
                assert_eq!(body["message"], "added successfully");
                assert_eq!(body["totalRecord"], 1);
                let id = added_id(&body);

                let (status, body) = list(&server, "faculty", &[("keyword", "CS")]).await;
                assert_eq!(status, StatusCode::OK);
                assert_eq!(body["status"], 1);
                assert_eq!(body["message"], "success");
                assert_eq!(body["totalRecord"], 1);
                assert_eq!(
                    body["response"],
                    json!([{"id": id, "data": {"FacultyName": "CS", "IsDelete": false}}])
                );
            }

            #[tokio::test]
            async fn test_duplicate_key_rejected() {
                let server = make_server().await;
                add(&server, "faculty", json!({"FacultyName": "CS"})).await;

                let response = server
                    .post("/api/faculty/add-faculty")
                    .json(&json!({"FacultyName": "CS"}))
                    .await;
                response.assert_status_ok();
                assert_eq!(
                    response.json::<Value>(),
                    json!({
                        "status": 0,
                        "message": "FacultyName already exists",
                        "response": null,
                        "totalRecord": 0
                    })
                );

                let (_, body) = list(&server, "faculty", &[]).await;
                assert_eq!(body["totalRecord"], 1);

                add(&server, "user", json!({"UserName": "an", "PassWord": "pw", "Type": 0})).await;
                let response = server
                    .post("/api/user/add-user")
                    .json(&json!({"UserName": "an", "PassWord": "other", "Type": 1}))
                    .await;
                assert_eq!(response.json::<Value>()["message"], "UserName already exists");

                add(&server, "student", json!({"StudentId": "SV001", "LastName": "Nguyen"})).await;
                let response = server
                    .post("/api/student/add-student")
                    .json(&json!({"StudentId": "SV001", "LastName": "Le"}))
                    .await;
                let body: Value = response.json();
                assert_eq!(body["status"], 0);
                assert_eq!(body["message"], "UserName already exists");
            }

            #[tokio::test]
            async fn test_soft_delete_hides_record() {
                let server = make_server().await;
                let id = add(&server, "major", json!({"MajorName": "Physics", "FacultyId": "f1"})).await;

                let response = server
                    .post("/api/major/delete-major")
                    .json(&json!({"Id": id}))
                    .await;
                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body["status"], 1);
                assert_eq!(body["message"], "information delete successfully");
                assert!(body["response"].is_null());

                let (status, body) = list(&server, "major", &[]).await;
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(
                    body,
                    json!({
                        "status": -1,
                        "message": "No documents found",
                        "response": null,
                        "totalRecord": 0
                    })
                );

                server
                    .post("/api/major/delete-major")
                    .json(&json!({"Id": id}))
                    .await
                    .assert_status_ok();

                let second = add(&server, "major", json!({"MajorName": "Physics"})).await;
                assert_ne!(second, id);
            }

            #[tokio::test]
            async fn test_update_overwrites_supplied_fields() {
                let server = make_server().await;
                let id = add(&server, "major", json!({"MajorName": "Physics", "FacultyId": "f1"})).await;

                let response = server
                    .post("/api/major/update-major")
                    .json(&json!({"Id": id, "MajorName": "Chemistry", "IsDelete": true}))
                    .await;
                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body["status"], 1);
                assert_eq!(body["message"], "updated successfully");

                let (_, body) = list(&server, "major", &[("keyword", "Chemistry")]).await;
                assert_eq!(body["totalRecord"], 1);
                let data = &body["response"][0]["data"];
                assert_eq!(data["FacultyId"], "f1");
                assert_eq!(data["IsDelete"], false);
            }

            #[tokio::test]
            async fn test_unknown_id() {
                let server = make_server().await;

                for path in ["/api/teacher/update-teacher", "/api/teacher/delete-teacher"] {
                    let response = server
                        .post(path)
                        .json(&json!({"Id": UNKNOWN_ID, "FirstName": "X"}))
                        .await;
                    response.assert_status(StatusCode::NOT_FOUND);
                    let body: Value = response.json();
                    assert_eq!(body["status"], 0);
                    assert_eq!(body["message"], "Document not found");
                }
            }

            #[tokio::test]
            async fn test_missing_id_is_bad_request() {
                let server = make_server().await;

                for path in ["/api/student/update-student", "/api/student/delete-student"] {
                    let response = server.post(path).json(&json!({"FirstName": "X"})).await;
                    response.assert_status(StatusCode::BAD_REQUEST);
                    assert_eq!(response.json::<Value>()["status"], -1);
                }
            }

            #[tokio::test]
            async fn test_pagination() {
                let server = make_server().await;
                for i in 0..12 {
                    add(&server, "faculty", json!({"FacultyName": format!("F{i:02}")})).await;
                }

                let (_, first) = list(&server, "faculty", &[]).await;
                assert_eq!(first["totalRecord"], 10);

                let (_, second) = list(&server, "faculty", &[("pageNumber", "2"), ("perPage", "10")]).await;
                assert_eq!(second["totalRecord"], 2);
                assert_eq!(second["response"][0]["data"]["FacultyName"], "F10");

                let (status, _) = list(&server, "faculty", &[("pageNumber", "3")]).await;
                assert_eq!(status, StatusCode::NOT_FOUND);

                let (_, wide) = list(&server, "faculty", &[("perPage", "5"), ("pageNumber", "2")]).await;
                assert_eq!(wide["totalRecord"], 5);
                assert_eq!(wide["response"][0]["data"]["FacultyName"], "F05");
            }

            #[tokio::test]
            async fn test_invalid_page_parameters() {
                let server = make_server().await;
                add(&server, "faculty", json!({"FacultyName": "CS"})).await;

                for query in [[("pageNumber", "abc")], [("perPage", "0")], [("pageNumber", "-1")]] {
                    let (status, body) = list(&server, "faculty", &query).await;
                    assert_eq!(status, StatusCode::BAD_REQUEST);
                    assert_eq!(body["status"], -1);
                    assert_eq!(body["message"], "Invalid page parameters");
                }
            }

            #[tokio::test]
            async fn test_page_past_the_end_is_empty() {
                let server = make_server().await;
                add(&server, "faculty", json!({"FacultyName": "CS"})).await;

                let (status, body) = list(
                    &server,
                    "faculty",
                    &[("pageNumber", "4294967295"), ("perPage", "4294967295")],
                )
                .await;
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(body["message"], "No documents found");
            }

            #[tokio::test]
            async fn test_full_name_derived_on_add_only() {
                let server = make_server().await;
                let id = add(
                    &server,
                    "student",
                    json!({"StudentId": "SV001", "LastName": "Nguyen", "FirstName": "An", "FullName": "ignored"}),
                )
                .await;

                let (_, body) = list(&server, "student", &[("keyword", "Nguyen An")]).await;
                assert_eq!(body["totalRecord"], 1);

                server
                    .post("/api/student/update-student")
                    .json(&json!({"Id": id, "FirstName": "Binh"}))
                    .await
                    .assert_status_ok();

                let (status, _) = list(&server, "student", &[("keyword", "Nguyen Binh")]).await;
                assert_eq!(status, StatusCode::NOT_FOUND);

                let (_, body) = list(&server, "student", &[("keyword", "Nguyen An")]).await;
                assert_eq!(body["response"][0]["data"]["FirstName"], "Binh");

                add(
                    &server,
                    "teacher",
                    json!({"TeacherId": "GV01", "LastName": "Tran", "FirstName": "Binh"}),
                )
                .await;
                let (_, body) = list(&server, "teacher", &[("keyword", "Tran Binh")]).await;
                assert_eq!(body["response"][0]["data"]["TeacherId"], "GV01");
            }

            #[tokio::test]
            async fn test_malformed_body() {
                let server = make_server().await;

                let response = server
                    .post("/api/faculty/add-faculty")
                    .content_type("application/json")
                    .bytes(Bytes::from_static(b"{not json"))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["status"], -1);
                assert!(body["response"].is_null());

                let response = server
                    .post("/api/faculty/add-faculty")
                    .json(&json!({}))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
            }

            // ==============================================================
            // Login check
            // ==============================================================

            #[tokio::test]
            async fn test_check_user_student_with_major() {
                let server = make_server().await;
                let user_id = add(&server, "user", json!({"UserName": "an", "PassWord": "pw", "Type": 0})).await;
                let major_id = add(&server, "major", json!({"MajorName": "Physics"})).await;
                add(
                    &server,
                    "student",
                    json!({
                        "UserId": user_id,
                        "StudentId": "SV001",
                        "LastName": "Nguyen",
                        "FirstName": "An",
                        "DateOfBirth": "2001-02-03",
                        "MajorId": major_id
                    }),
                )
                .await;

                let body = check_user(&server, "an", "pw").await;
                assert_eq!(body["status"], 1);
                assert_eq!(body["message"], "Tài khoản chính xác!");
                assert_eq!(body["totalRecord"], 1);
                assert_eq!(
                    body["response"],
                    json!({
                        "LastName": "Nguyen",
                        "FirstName": "An",
                        "FullName": "Nguyen An",
                        "DateOfBirth": "2001-02-03",
                        "StudentId": "SV001",
                        "MajorId": major_id,
                        "MajorName": "Physics",
                        "Type": 0
                    })
                );
            }

            #[tokio::test]
            async fn test_check_user_student_with_missing_major() {
                let server = make_server().await;
                let user_id = add(&server, "user", json!({"UserName": "an", "PassWord": "pw", "Type": 0})).await;
                add(
                    &server,
                    "student",
                    json!({
                        "UserId": user_id,
                        "StudentId": "SV001",
                        "LastName": "Nguyen",
                        "FirstName": "An",
                        "MajorId": UNKNOWN_ID
                    }),
                )
                .await;

                let body = check_user(&server, "an", "pw").await;
                assert_eq!(body["status"], 1);
                let profile = &body["response"];
                assert_eq!(profile["StudentId"], "SV001");
                assert_eq!(profile["FullName"], "Nguyen An");
                assert_eq!(profile["Type"], 0);
                assert!(profile.get("MajorId").is_some_and(Value::is_null));
                assert!(profile.get("FacultyName").is_some_and(Value::is_null));
                assert!(profile.get("MajorName").is_none());
            }

            #[tokio::test]
            async fn test_check_user_teacher_with_missing_faculty() {
                let server = make_server().await;
                let user_id = add(&server, "user", json!({"UserName": "binh", "PassWord": "pw", "Type": "1"})).await;
                add(
                    &server,
                    "teacher",
                    json!({
                        "UserId": user_id,
                        "TeacherId": "GV01",
                        "LastName": "Tran",
                        "FirstName": "Binh",
                        "FacultyId": UNKNOWN_ID
                    }),
                )
                .await;

                let body = check_user(&server, "binh", "pw").await;
                assert_eq!(body["status"], 1);
                let profile = &body["response"];
                assert_eq!(profile["TeacherId"], "GV01");
                assert_eq!(profile["FullName"], "Tran Binh");
                assert_eq!(profile["Type"], 1);
                assert!(profile.get("FacultyId").is_some_and(Value::is_null));
                assert!(profile.get("FacultyName").is_some_and(Value::is_null));
            }

            #[tokio::test]
            async fn test_check_user_wrong_password() {
                let server = make_server().await;
                add(&server, "user", json!({"UserName": "an", "PassWord": "pw", "Type": 0})).await;

                let body = check_user(&server, "an", "wrong").await;
                assert_eq!(
                    body,
                    json!({
                        "status": 0,
                        "message": "Tài khoản không tồn tại trong hệ thống!",
                        "response": null,
                        "totalRecord": 0
                    })
                );
            }

            #[tokio::test]
            async fn test_check_user_unknown_type() {
                let server = make_server().await;
                add(&server, "user", json!({"UserName": "root", "PassWord": "pw", "Type": 7})).await;

                let body = check_user(&server, "root", "pw").await;
                assert_eq!(body["status"], 1);
                assert!(body["response"].is_null());
                assert_eq!(body["totalRecord"], 0);
            }

            #[tokio::test]
            async fn test_check_user_missing_parameter() {
                let server = make_server().await;
                let response = server
                    .get("/api/user/checkuser")
                    .add_query_param("UserName", "an")
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_eq!(response.json::<Value>()["status"], -1);
            }

            // ==============================================================
            // Misc
            // ==============================================================

            #[tokio::test]
            async fn test_health() {
                let server = make_server().await;
                for path in ["/health", "/healthz"] {
                    let response = server.get(path).await;
                    response.assert_status_ok();
                    assert_eq!(
                        response.json::<Value>(),
                        json!({"status": "ok", "service": "registrar-rs"})
                    );
                }
            }
        }
    };
}
