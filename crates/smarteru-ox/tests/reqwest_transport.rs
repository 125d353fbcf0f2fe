use smarteru_ox::{GetUserQuery, SmarterU, SmarterURequestError};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> SmarterU {
    SmarterU::builder()
        .account_api("account")
        .user_api("user")
        .base_url(format!("{}/apiv2/", server.uri()))
        .build()
}

#[tokio::test]
async fn package_travels_as_a_form_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/apiv2/"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("package=%3C%3Fxml"))
        .and(body_string_contains("%3CMethod%3EgetUser%3C%2FMethod%3E"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<SmarterU><Result>Success</Result><Info><User><ID>42</ID>\
             <Email>test@test.com</Email></User></Info><Errors/></SmarterU>",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .get_user(&GetUserQuery::by_email("test@test.com"))
        .await
        .unwrap();

    assert_eq!(response.response.id, "42");
    assert_eq!(response.response.email, "test@test.com");
}

#[tokio::test]
async fn not_found_is_an_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<html>nope</html>"))
        .mount(&server)
        .await;

    let err = client(&server)
        .get_user(&GetUserQuery::by_id("1"))
        .await
        .unwrap_err();

    match err {
        SmarterURequestError::Http(message) => {
            assert!(message.starts_with("Client error: POST "), "{message}");
            assert!(message.ends_with("resulted in a `404 Not Found` response"), "{message}");
        }
        other => panic!("expected an HTTP error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_endpoint_is_an_http_error() {
    let client = SmarterU::builder()
        .account_api("account")
        .user_api("user")
        .base_url("http://127.0.0.1:9/apiv2/")
        .build();

    let err = client.get_user(&GetUserQuery::by_id("1")).await.unwrap_err();
    assert!(matches!(err, SmarterURequestError::Http(_)));
}
